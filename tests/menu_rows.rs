// tests/menu_rows.rs
use menu_page::csv::{self, Delim};
use menu_page::menu::{Entry, Menu, MenuStats};
use menu_page::price::{PriceInfo, PriceRule};

const SAMPLE: &str = include_str!("fixtures/core_goods_sample.csv");

fn sample_menu() -> Menu {
    Menu::from_rows(&csv::parse_rows(SAMPLE, Delim::Csv))
}

fn rows(lines: &[&[&str]]) -> Vec<Vec<String>> {
    lines.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
}

#[test]
fn sample_sheet_stats() {
    let menu = sample_menu();
    // junk x3, blank x1, table header x1
    assert_eq!(menu.stats(), MenuStats { sections: 4, items: 12, priced: 11, skipped: 5 });
}

#[test]
fn sections_keep_sheet_order_and_unique_ids() {
    let menu = sample_menu();
    let ids: Vec<&str> = menu.sections().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["bakery", "produce", "deli", "bakery-x"]);

    let titles: Vec<&str> = menu.sections().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["BAKERY", "PRODUCE", "DELI", "BAKERY"]);
}

#[test]
fn items_carry_their_section() {
    let menu = sample_menu();
    let bread = menu.items().find(|i| i.name == "Day-old Bread").unwrap();
    assert_eq!(bread.section.as_deref(), Some("bakery-x"));
    let kale = menu.items().find(|i| i.name == "Kale").unwrap();
    assert_eq!(kale.section.as_deref(), Some("produce"));
}

#[test]
fn sample_prices() {
    let menu = sample_menu();
    let price = |name: &str| menu.items().find(|i| i.name == name).map(|i| (i.rule, i.price)).unwrap();

    assert_eq!(price("Sourdough Loaf"), (PriceRule::Standard, PriceInfo { standard: 8.0, bulk: 0.0, threshold: 0 }));
    assert_eq!(price("Gluten-Free Cookies"), (PriceRule::Tiered, PriceInfo { standard: 2.0, bulk: 1.65, threshold: 6 }));
    assert_eq!(price("Bagels"), (PriceRule::Bundle, PriceInfo { standard: 2.995, bulk: 2.995, threshold: 2 }));
    assert_eq!(price("Muffins"), (PriceRule::Bundle, PriceInfo { standard: 3.0, bulk: 2.5, threshold: 6 }));
    assert_eq!(price("Heirloom Tomatoes").1.standard, 4.5);
    assert_eq!(price("Kale"), (PriceRule::RawNumber, PriceInfo { standard: 4.99, bulk: 0.0, threshold: 0 }));
    assert_eq!(price("Mystery Box"), (PriceRule::Unpriced, PriceInfo::ZERO));
    assert_eq!(price("Hummus").1, PriceInfo { standard: 2.5, bulk: 2.5, threshold: 2 });
    assert_eq!(price("Mom's \"Famous\" Pie").1.standard, 18.0);
}

#[test]
fn sized_row_becomes_two_products() {
    let menu = sample_menu();
    let soups: Vec<_> = menu.items().filter(|i| i.name.starts_with("Chicken Soup")).collect();
    assert_eq!(soups.len(), 2);
    assert_eq!(soups[0].name, "Chicken Soup (pt)");
    assert_eq!(soups[0].price_text, "$4.50");
    assert_eq!(soups[1].name, "Chicken Soup (qt)");
    assert_eq!(soups[1].price.standard, 8.0);
    // both halves keep the row's notes
    assert!(soups.iter().all(|s| s.notes == "Keto friendly"));
}

#[test]
fn item_before_any_section_has_none() {
    let menu = Menu::from_rows(&rows(&[&["Honey", "$9", ""], &["SWEETS", ""], &["Fudge", "$4"]]));
    let items: Vec<_> = menu.items().collect();
    assert_eq!(items[0].section, None);
    assert_eq!(items[1].section.as_deref(), Some("sweets"));
}

#[test]
fn repeated_titles_keep_growing_the_suffix() {
    let menu = Menu::from_rows(&rows(&[&["DELI"], &["DELI"], &["DELI"]]));
    let ids: Vec<&str> = menu.sections().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["deli", "deli-x", "deli-x-x"]);
}

#[test]
fn short_rows_and_extra_columns() {
    let menu = Menu::from_rows(&rows(&[
        &["Jam"],
        &["Butter", "$6", "salted", "  cultured  ", ""],
        &["", "$3", "no name"],
    ]));
    let items: Vec<_> = menu.items().collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].price_text, "");
    assert!(!items[0].price.is_priceable());
    assert_eq!(items[1].notes, "salted cultured");
    assert_eq!(menu.stats().skipped, 1);
}

#[test]
fn entries_interleave_sections_and_items() {
    let menu = Menu::from_rows(&rows(&[&["FRUIT", ""], &["Pears", "$2"], &["GREENS", ""], &["Leeks", "$3"]]));
    let kinds: Vec<&str> = menu
        .entries()
        .iter()
        .map(|e| match e {
            Entry::Section(_) => "S",
            Entry::Item(_) => "I",
        })
        .collect();
    assert_eq!(kinds, vec!["S", "I", "S", "I"]);
}

#[test]
fn empty_sheet_is_an_empty_menu() {
    let menu = Menu::from_rows(&[]);
    assert_eq!(menu.stats(), MenuStats::default());
}
