// src/price.rs
//! Price-column interpreter.
//!
//! Hand-typed price cells come in many shapes (`$5`, `2/$5.99`,
//! `$2.00/each or $1.65/each for 6+`, `approx $4.50 / lb`, `4.99`). This
//! module turns one cell into a [`PriceInfo`] using an ordered list of rules;
//! the first rule that matches decides the result.
//!
//! The interpreter never fails. Anything it cannot read becomes the zero
//! record, which the renderer shows as "See details" without a purchase control.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `$5`, `$5.99`, `$5.` (fraction optional)
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([0-9]+\.?[0-9]*)").unwrap());
/// `6+`
static THRESHOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)\+").unwrap());
/// `2/$5.99`, `6 for $15`
static BUNDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*(?:/|for)\s*\$([0-9]+\.?[0-9]*)").unwrap());
/// `4.99` typed without a currency sign
static RAW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+\.[0-9]{2})").unwrap());

/// Structured price model for one menu item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PriceInfo {
    /// Per-unit price below the bulk threshold, or the only price.
    pub standard: f64,
    /// Per-unit price once quantity reaches `threshold`. Meaningless when `threshold == 0`.
    pub bulk: f64,
    /// Minimum quantity for `bulk`; `0` means no bulk rule.
    pub threshold: u32,
}

impl PriceInfo {
    pub const ZERO: PriceInfo = PriceInfo { standard: 0.0, bulk: 0.0, threshold: 0 };

    /// Something a customer can put in the cart.
    pub fn is_priceable(&self) -> bool {
        self.standard > 0.0
    }

    pub fn has_bulk_rule(&self) -> bool {
        self.threshold > 0
    }

    /// Per-unit price charged when `qty` units are ordered.
    pub fn unit_price(&self, qty: u32) -> f64 {
        if self.has_bulk_rule() && qty >= self.threshold {
            self.bulk
        } else {
            self.standard
        }
    }
}

/// Which rule of the waterfall produced a [`PriceInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PriceRule {
    /// "standard ... or bulk ... for N+"
    Tiered,
    /// "N for $X" / "N/$X"
    Bundle,
    /// First dollar amount, nothing else recognised
    Standard,
    /// Bare `d.dd` number without `$`
    RawNumber,
    Unpriced,
}

impl PriceRule {
    pub fn label(&self) -> &'static str {
        match self {
            PriceRule::Tiered    => "tiered",
            PriceRule::Bundle    => "bundle",
            PriceRule::Standard  => "standard",
            PriceRule::RawNumber => "raw number",
            PriceRule::Unpriced  => "unpriced",
        }
    }
}

/// Interpret one price cell. Pure; never fails.
pub fn interpret(text: &str) -> PriceInfo {
    interpret_with_rule(text).1
}

/// Same as [`interpret`], also reporting which rule fired.
pub fn interpret_with_rule(text: &str) -> (PriceRule, PriceInfo) {
    if text.is_empty() {
        return (PriceRule::Unpriced, PriceInfo::ZERO);
    }

    let amounts: Vec<f64> = AMOUNT_RE
        .captures_iter(text)
        .map(|c| parse_amount(&c[1]))
        .collect();

    if let Some(info) = tiered(text, &amounts) {
        return (PriceRule::Tiered, info);
    }
    if let Some(info) = bundle(text, &amounts) {
        return (PriceRule::Bundle, info);
    }
    if let Some(&first) = amounts.first() {
        return (PriceRule::Standard, PriceInfo { standard: first, bulk: 0.0, threshold: 0 });
    }
    if let Some(c) = RAW_RE.captures(text) {
        return (PriceRule::RawNumber, PriceInfo { standard: parse_amount(&c[1]), bulk: 0.0, threshold: 0 });
    }

    (PriceRule::Unpriced, PriceInfo::ZERO)
}

/* ---------- rules ---------- */

fn tiered(text: &str, amounts: &[f64]) -> Option<PriceInfo> {
    if !text.contains('+') || amounts.len() < 2 {
        return None;
    }
    let threshold = THRESHOLD_RE
        .captures(text)
        .and_then(|c| c[1].parse::<u32>().ok())
        .unwrap_or(0);

    Some(PriceInfo { standard: amounts[0], bulk: amounts[1], threshold })
}

fn bundle(text: &str, amounts: &[f64]) -> Option<PriceInfo> {
    let caps = BUNDLE_RE.captures(text)?;

    // A zero or oversized quantity is not a bundle we can divide by.
    let qty: u32 = caps[1].parse().ok().filter(|&q| q > 0)?;
    let bundle_price = parse_amount(&caps[2]);
    let per_unit = bundle_price / f64::from(qty);

    // "$3 each / 6 for $15": the leading amount stays the standard price.
    let standard = match amounts {
        [first, _, ..] if *first != bundle_price => *first,
        _ => per_unit,
    };

    Some(PriceInfo { standard, bulk: per_unit, threshold: qty })
}

/// `"5"`, `"5.99"`, and the trailing-dot form `"5."` all parse.
fn parse_amount(s: &str) -> f64 {
    s.trim_end_matches('.').parse::<f64>().unwrap_or(0.0)
}
