// src/gui/components/preview_table.rs
//
// Read-only view of how each row was understood: which price rule fired and
// the numbers the cart will use. Rows the page can't sell are greyed out.

use std::collections::HashMap;

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, menu::MenuItem};

const HEADERS: [&str; 7] = ["Section", "Item", "Price text", "Rule", "Standard", "Bulk", "Min qty"];
const WIDTHS: [f32; 7] = [140.0, 220.0, 220.0, 80.0, 70.0, 70.0, 60.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(page) = app.page.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No sheet loaded").weak());
        });
        return;
    };

    let titles: HashMap<&str, &str> = page
        .menu
        .sections()
        .map(|s| (s.id.as_str(), s.title.as_str()))
        .collect();

    let priced_only = app.state.gui.preview_priced_only;
    let items: Vec<&MenuItem> = page
        .menu
        .items()
        .filter(|i| !priced_only || i.price.is_priceable())
        .collect();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, items.len(), |mut row| {
                let item = items[row.index()];
                let section = item
                    .section
                    .as_deref()
                    .and_then(|id| titles.get(id).copied())
                    .unwrap_or("");

                let p = &item.price;
                let cells = [
                    s!(section),
                    item.name.clone(),
                    item.price_text.clone(),
                    s!(item.rule.label()),
                    money(p.standard),
                    if p.has_bulk_rule() { money(p.bulk) } else { s!() },
                    if p.has_bulk_rule() { p.threshold.to_string() } else { s!() },
                ];

                for cell in cells {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        let mut rt = RichText::new(cell);
                        if !p.is_priceable() {
                            rt = rt.weak();
                        }
                        ui.label(rt);
                    });
                }
            });
        });
}

/// Two decimals, three when a bundle split leaves a fraction of a cent (2.995).
fn money(v: f64) -> String {
    if v == 0.0 {
        return s!();
    }
    let cents = v * 100.0;
    if (cents - cents.round()).abs() > 1e-6 { format!("{v:.3}") } else { format!("{v:.2}") }
}
