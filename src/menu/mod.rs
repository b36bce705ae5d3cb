// src/menu/mod.rs
//! Turns raw spreadsheet rows into an ordered menu of sections and items.
//!
//! Rows are classified one at a time ([`classify_row`]); items are priced with
//! [`crate::price::interpret`] as they are built, so a [`Menu`] is ready to render.

mod classify;
mod sizes;

pub use classify::{RowKind, classify_row};
pub use sizes::{SizedRow, split_sizes};

use serde::Serialize;

use crate::config::consts::SECTION_ID_DEDUP_SUFFIX;
use crate::core::sanitize::section_slug;
use crate::price::{self, PriceInfo, PriceRule};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    /// Unique anchor id within the page
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub price_text: String,
    pub notes: String,
    pub price: PriceInfo,
    pub rule: PriceRule,
    /// Id of the enclosing section, if any came before it
    pub section: Option<String>,
}

impl MenuItem {
    pub fn new(name: &str, price_text: &str, notes: &str, section: Option<&str>) -> Self {
        let (rule, price) = price::interpret_with_rule(price_text);
        Self {
            name: s!(name),
            price_text: s!(price_text),
            notes: s!(notes),
            price,
            rule,
            section: section.map(String::from),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Entry {
    Section(Section),
    Item(MenuItem),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuStats {
    pub sections: usize,
    pub items: usize,
    /// Items that get a purchase control
    pub priced: usize,
    /// Blank, junk, header and orphan rows
    pub skipped: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Menu {
    entries: Vec<Entry>,
    skipped: usize,
}

impl Menu {
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut menu = Menu::default();
        let mut current: Option<String> = None;

        for row in rows {
            match classify_row(row) {
                RowKind::Section(title) => {
                    let id = menu.unique_section_id(&title);
                    logd!("Menu: section {title:?} → #{id}");
                    current = Some(id.clone());
                    menu.entries.push(Entry::Section(Section { title, id }));
                }
                RowKind::Item { name, price_text, notes } => {
                    for sized in split_sizes(&name, &price_text) {
                        let item = MenuItem::new(&sized.name, &sized.price_text, &notes, current.as_deref());
                        logd!(
                            "Menu: item {:?} price {:?} → {} {:?}",
                            item.name, item.price_text, item.rule.label(), item.price
                        );
                        menu.entries.push(Entry::Item(item));
                    }
                }
                RowKind::Blank | RowKind::Junk | RowKind::TableHeader | RowKind::Orphan => {
                    menu.skipped += 1;
                }
            }
        }
        menu
    }

    fn unique_section_id(&self, title: &str) -> String {
        let mut id = section_slug(title);
        while self.sections().any(|s| s.id == id) {
            id.push_str(SECTION_ID_DEDUP_SUFFIX);
        }
        id
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Section(s) => Some(s),
            Entry::Item(_) => None,
        })
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Item(i) => Some(i),
            Entry::Section(_) => None,
        })
    }

    pub fn stats(&self) -> MenuStats {
        MenuStats {
            sections: self.sections().count(),
            items: self.items().count(),
            priced: self.items().filter(|i| i.price.is_priceable()).count(),
            skipped: self.skipped,
        }
    }
}
