// tests/price_patterns.rs
//
// Price-cell interpretation against the phrasings seen on real weekly sheets.
//
use menu_page::price::{self, PriceInfo, PriceRule, interpret, interpret_with_rule};

fn info(standard: f64, bulk: f64, threshold: u32) -> PriceInfo {
    PriceInfo { standard, bulk, threshold }
}

#[test]
fn empty_is_zero() {
    assert_eq!(interpret(""), PriceInfo::ZERO);
    assert_eq!(interpret(""), PriceInfo::default());
}

#[test]
fn plain_amounts() {
    assert_eq!(interpret("$5"), info(5.0, 0.0, 0));
    assert_eq!(interpret("$5.99"), info(5.99, 0.0, 0));
    assert_eq!(interpret("$3.29"), info(3.29, 0.0, 0));
}

#[test]
fn tiered_deal() {
    assert_eq!(interpret("$2.00/each or $1.65/each for 6+"), info(2.00, 1.65, 6));
}

#[test]
fn tiered_without_threshold_number_keeps_zero() {
    // '+' present but not right after a number
    assert_eq!(interpret("$4 or $3.50 + tax"), info(4.0, 3.5, 0));
}

#[test]
fn tiered_wins_over_bundle() {
    let (rule, p) = interpret_with_rule("$3 each or 6/$15 for 6+");
    assert_eq!(rule, PriceRule::Tiered);
    assert_eq!(p, info(3.0, 15.0, 6));
}

#[test]
fn plus_with_one_amount_falls_through() {
    let (rule, p) = interpret_with_rule("$12 for 2+ people");
    assert_eq!(rule, PriceRule::Standard);
    assert_eq!(p, info(12.0, 0.0, 0));
}

#[test]
fn bundle_only() {
    assert_eq!(interpret("2/$5.99"), info(2.995, 2.995, 2));
    assert_eq!(interpret("2 for $5"), info(2.5, 2.5, 2));
    assert_eq!(interpret("6 for $15"), info(2.5, 2.5, 6));
}

#[test]
fn bundle_with_separate_standard_price() {
    // leading price kept undivided; bundle drives bulk + threshold
    assert_eq!(interpret("$3 each / 6 for $15"), info(3.0, 2.5, 6));
}

#[test]
fn bundle_repeating_its_own_price_is_still_bundle_only() {
    assert_eq!(interpret("2/$5 ($5 per pair)"), info(2.5, 2.5, 2));
}

#[test]
fn division_is_not_rounded() {
    let p = interpret("3/$10");
    assert_eq!(p.threshold, 3);
    assert_eq!(p.standard, 10.0 / 3.0);
    assert_eq!(p.bulk, p.standard);
}

#[test]
fn slash_without_bundle_shape_is_standard() {
    assert_eq!(interpret("approx $4.50 / lb"), info(4.50, 0.0, 0));
}

#[test]
fn raw_number_needs_two_decimals() {
    assert_eq!(interpret("4.99"), info(4.99, 0.0, 0));
    assert_eq!(interpret("about 4.9 each"), PriceInfo::ZERO);
    assert_eq!(interpret("12 eggs"), PriceInfo::ZERO);
}

#[test]
fn text_only_is_unpriced() {
    assert_eq!(interpret("See details"), PriceInfo::ZERO);
    assert_eq!(interpret_with_rule("Market price").0, PriceRule::Unpriced);
}

#[test]
fn fallback_label_does_not_reparse_to_a_price() {
    let label = menu_page::config::consts::UNPRICED_LABEL;
    assert_eq!(interpret(label), PriceInfo::ZERO);
    assert!(!interpret(label).is_priceable());
}

#[test]
fn deterministic_and_non_negative() {
    let inputs = [
        "", "$5", "2/$5.99", "$2.00/each or $1.65/each for 6+", "0/$5", "99999999999999999999/$1",
        "$", "$.", "+", "++$1+$2", "for for $", "-$5", "$-5", "1/2 price", "€4,50",
    ];
    for text in inputs {
        let a = interpret(text);
        let b = interpret(text);
        assert_eq!(a, b, "not deterministic for {text:?}");
        assert!(a.standard >= 0.0 && a.bulk >= 0.0, "negative for {text:?}: {a:?}");
    }
}

#[test]
fn oversized_quantity_is_not_a_bundle() {
    let (rule, p) = interpret_with_rule("99999999999999999999/$1");
    assert_eq!(rule, PriceRule::Standard);
    assert_eq!(p, info(1.0, 0.0, 0));
}

#[test]
fn unit_price_only_applies_bulk_with_a_threshold() {
    // standard fallback leaves bulk at 0; it must never be charged
    let p = price::interpret("$4.50");
    assert!(!p.has_bulk_rule());
    assert_eq!(p.unit_price(50), 4.50);
}
