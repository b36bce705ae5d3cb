// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load,export,copy}.

mod load;    // src/gui/actions/load.rs
mod export;  // src/gui/actions/export.rs
mod copy;    // src/gui/actions/copy.rs

pub use load::load;
pub use export::export;
pub use copy::copy;

use crate::{gui::app::App, render};

/// Render the loaded menu with the options currently in the form.
/// Shop name / e-mail edits after Load take effect without reloading.
pub(super) fn current_html(app: &App) -> Option<String> {
    let page = app.page.as_ref()?;
    Some(render::render_page(&page.menu, &app.state.options.page))
}
