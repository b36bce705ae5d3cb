// src/convert.rs
//! Sheet in, page out.
//!
//! ```text
//! bytes → csv::decode → csv::parse_rows → Menu::from_rows → render::render_page
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::options::{ExportOptions, PageOptions};
use crate::csv::{self, Delim};
use crate::error::{ConvertError, Result};
use crate::file;
use crate::menu::{Menu, MenuStats};
use crate::render;

/// A rendered page together with the menu it was built from.
pub struct MenuPage {
    pub menu: Menu,
    pub html: String,
}

impl MenuPage {
    pub fn stats(&self) -> MenuStats {
        self.menu.stats()
    }
}

/// What a file conversion produced.
#[derive(Clone, Debug)]
pub struct ConvertSummary {
    pub output: PathBuf,
    pub stats: MenuStats,
    pub bytes: usize,
}

pub fn convert_str(text: &str, delim: Delim, opts: &PageOptions) -> MenuPage {
    let rows = csv::parse_rows(text, delim);
    let menu = Menu::from_rows(&rows);
    let html = render::render_page(&menu, opts);

    let stats = menu.stats();
    logf!(
        "Convert: rows={}, sections={}, items={}, priced={}, skipped={}",
        rows.len(), stats.sections, stats.items, stats.priced, stats.skipped
    );
    if stats.items == 0 {
        logd!("Convert: no items found; page will only hold the shell");
    }

    MenuPage { menu, html }
}

pub fn convert_reader<R: Read>(mut reader: R, delim: Delim, opts: &PageOptions) -> Result<MenuPage> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(convert_str(&csv::decode(&bytes), delim, opts))
}

/// Load the sheet at `input` (CSV, or TSV by extension), render, and write the
/// page to `export.out_path()`.
pub fn convert_file(input: &Path, export: &ExportOptions, opts: &PageOptions) -> Result<ConvertSummary> {
    let bytes = std::fs::read(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    logf!("Convert: Begin input={} ({} bytes)", input.display(), bytes.len());

    file::guard_input(&export.out_path(), input)?;

    let page = convert_str(&csv::decode(&bytes), Delim::from_path(input), opts);
    let output = file::write_page(export, &page.html)?;

    logf!("Convert: OK → {}", output.display());
    Ok(ConvertSummary { output, stats: page.stats(), bytes: page.html.len() })
}
