// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub page: PageOptions,
    pub export: ExportOptions,
}

/// Everything the rendered page says about the shop itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub shop_name: String,
    pub order_email: String,
    pub email_subject: String,
    /// Falls back to "<shop> Order" when unset.
    pub page_title: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            shop_name: s!(DEFAULT_SHOP_NAME),
            order_email: s!(DEFAULT_ORDER_EMAIL),
            email_subject: s!(DEFAULT_EMAIL_SUBJECT),
            page_title: None,
        }
    }
}

impl PageOptions {
    pub fn title(&self) -> String {
        match &self.page_title {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => join!(self.shop_name.trim(), " Order"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(DEFAULT_OUT_FILE) }
    }
}

impl ExportOptions {
    /// Final file path. A directory (existing, or typed with a trailing
    /// separator) gets the default file name appended.
    pub fn out_path(&self) -> PathBuf {
        if looks_like_dir_hint(&self.out_path) || self.out_path.is_dir() {
            self.out_path.join(DEFAULT_OUT_FILE)
        } else {
            self.out_path.clone()
        }
    }

    /// Parse GUI/CLI text into a path. Empty text restores the default.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_FILE)
        } else {
            PathBuf::from(normalize_separators(s))
        };
    }

    /// Output next to the input file, named after it: `menu.csv` → `menu.html`.
    /// An input that is already HTML gets `<stem>_menu.html` instead.
    pub fn beside_input(input: &Path) -> Self {
        let is_html = input
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"));

        let out_path = if is_html {
            let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
            input.with_file_name(format!("{stem}_menu.html"))
        } else {
            input.with_extension("html")
        };
        Self { out_path }
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
