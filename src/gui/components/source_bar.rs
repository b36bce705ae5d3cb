// src/gui/components/source_bar.rs
//
// Input sheet path + shop details. Shop fields only change rendering, so they
// apply to the next Export/Copy without reloading.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Sheet:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.input_text)
                .hint_text("path/to/product_list.csv")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Load").clicked() || enter {
            actions::load(app);
        }
    });

    let page = &mut app.state.options.page;
    ui.horizontal(|ui| {
        ui.label("Shop:");
        if ui.add(egui::TextEdit::singleline(&mut page.shop_name).desired_width(160.0)).changed() {
            logd!("UI: shop_name → {}", page.shop_name);
        }

        ui.label("Order e-mail:");
        if ui.add(egui::TextEdit::singleline(&mut page.order_email).desired_width(220.0)).changed() {
            logd!("UI: order_email → {}", page.order_email);
        }

        ui.label("Title:");
        let mut title = page.page_title.clone().unwrap_or_default();
        if ui
            .add(egui::TextEdit::singleline(&mut title).hint_text(page.title()).desired_width(180.0))
            .changed()
        {
            page.page_title = if title.trim().is_empty() { None } else { Some(title) };
            logd!("UI: page_title → {:?}", page.page_title);
        }
    });
}
