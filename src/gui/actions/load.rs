// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{config::options::ExportOptions, csv::Delim, convert, gui::app::App};

pub fn load(app: &mut App) {
    let text = app.state.gui.input_text.trim().to_string();
    if text.is_empty() {
        logd!("Load: Clicked with an empty input path");
        app.status("Enter the path of a product sheet first");
        return;
    }

    let path = PathBuf::from(&text);
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            loge!("Load: Cannot read {}: {}", path.display(), e);
            app.status(format!("Cannot read {}: {e}", path.display()));
            return;
        }
    };

    let page = convert::convert_str(
        &crate::csv::decode(&bytes),
        Delim::from_path(&path),
        &app.state.options.page,
    );
    let st = page.stats();
    logf!("Load: OK {} items={} priced={}", path.display(), st.items, st.priced);

    // Follow the input unless the user already chose an output.
    if !app.out_path_dirty {
        app.state.options.export = ExportOptions::beside_input(&path);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    }

    app.status(format!(
        "Loaded {}: {} sections, {} items ({} orderable, {} rows skipped)",
        path.display(), st.sections, st.items, st.priced, st.skipped
    ));
    app.page = Some(page);
    app.loaded_from = Some(path);
}
