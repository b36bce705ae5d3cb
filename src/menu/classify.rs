// src/menu/classify.rs
//
// Decides what one spreadsheet row is. Cells arrive untrimmed; nothing here
// looks at prices beyond handing the raw price cell along.

use crate::config::consts::{SECTION_MIN_LEN, SKIP_PHRASES, TABLE_HEADER_PREFIX};
use crate::core::sanitize::{is_all_upper, normalize_ws};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// All cells empty
    Blank,
    /// Sheet chrome ("Week of 1/28", "Turn your phone sideways", ...)
    Junk,
    /// "FRESH PRODUCE" with an empty price cell
    Section(String),
    /// The "Item, Price, Notes" line
    TableHeader,
    Item { name: String, price_text: String, notes: String },
    /// Content without a name in the first cell
    Orphan,
}

pub fn classify_row(raw: &[String]) -> RowKind {
    let row: Vec<&str> = raw.iter().map(|c| c.trim()).collect();

    if row.iter().all(|c| c.is_empty()) {
        return RowKind::Blank;
    }

    let line = row.join(" ").to_lowercase();
    if SKIP_PHRASES.iter().any(|p| line.contains(p)) {
        return RowKind::Junk;
    }

    let first = row[0];
    let second = row.get(1).copied().unwrap_or("");

    if is_all_upper(first) && first.chars().count() >= SECTION_MIN_LEN && second.is_empty() {
        return RowKind::Section(s!(first));
    }

    if first.to_lowercase().starts_with(TABLE_HEADER_PREFIX) {
        return RowKind::TableHeader;
    }

    if first.is_empty() {
        return RowKind::Orphan;
    }

    let notes = if row.len() > 2 { normalize_ws(&row[2..].join(" ")) } else { s!() };
    RowKind::Item {
        name: s!(first),
        price_text: s!(second),
        notes,
    }
}
