// src/gui/actions/export.rs
use crate::{file, gui::app::App};

use super::current_html;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();

    let Some(html) = current_html(app) else {
        logd!("Export: Clicked, but nothing is loaded");
        app.status("Nothing to export (load a sheet first)");
        return;
    };

    // never write over the sheet the page was loaded from
    let guard = match &app.loaded_from {
        Some(source) => file::guard_input(&app.state.options.export.out_path(), source),
        None => Ok(()),
    };
    if let Err(e) = guard {
        loge!("Export: Refused: {}", e);
        app.status(format!("Export error: {e}"));
        return;
    }

    let status_msg = match file::write_page(&app.state.options.export, &html) {
        Ok(path) => {
            logf!("Export: OK → {} ({} bytes)", path.display(), html.len());
            format!("Saved page to {}", path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
