// src/gui/components/export_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let loaded = app.page.is_some();
        if ui.add_enabled(loaded, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(loaded, egui::Button::new("Copy HTML")).clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }

        ui.separator();
        if ui.checkbox(&mut app.state.gui.preview_priced_only, "Orderable only").changed() {
            logd!("UI: preview_priced_only → {}", app.state.gui.preview_priced_only);
        }
    });
}
