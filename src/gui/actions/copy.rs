// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

use super::current_html;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(html) = current_html(app) else {
        logd!("Copy: Clicked, but nothing is loaded");
        app.status("Nothing to copy (load a sheet first)");
        return;
    };

    logf!("Copy: page html bytes={}", html.len());
    ui_ctx.copy_text(html);
    app.status("Copied page HTML to clipboard");
}
