// src/menu/sizes.rs
//
// One spreadsheet row sometimes lists several sizes in its price cell
// ("$4.50 pt / $8.00 qt"). Each size becomes its own product so it gets its
// own cart control.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::SIZE_LABELS;

static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let labels = SIZE_LABELS.join("|");
    Regex::new(&format!(r"(?i)\$?([0-9]+(?:\.[0-9]{{2}})?)\s*({labels})\b")).unwrap()
});

/// A named product with its own raw price cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizedRow {
    pub name: String,
    pub price_text: String,
}

/// Split `price_text` into one row per size when it names more than one size.
/// Otherwise the row is returned unchanged.
pub fn split_sizes(name: &str, price_text: &str) -> Vec<SizedRow> {
    let matches: Vec<(&str, &str)> = SIZE_RE
        .captures_iter(price_text)
        .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
        .collect();

    if matches.len() > 1 {
        matches
            .into_iter()
            .map(|(amount, size)| SizedRow {
                name: format!("{name} ({size})"),
                price_text: join!("$", amount),
            })
            .collect()
    } else {
        vec![SizedRow { name: s!(name), price_text: s!(price_text) }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sizes_split() {
        let out = split_sizes("Soup", "$4.50 pt / $8.00 qt");
        assert_eq!(out, vec![
            SizedRow { name: s!("Soup (pt)"), price_text: s!("$4.50") },
            SizedRow { name: s!("Soup (qt)"), price_text: s!("$8.00") },
        ]);
    }

    #[test]
    fn label_case_is_kept_and_dollar_optional() {
        let out = split_sizes("Pie", "12 Whole, 7 HALF");
        assert_eq!(out[0].name, "Pie (Whole)");
        assert_eq!(out[0].price_text, "$12");
        assert_eq!(out[1].name, "Pie (HALF)");
    }

    #[test]
    fn single_size_untouched() {
        let out = split_sizes("Jam", "$6 pint");
        assert_eq!(out, vec![SizedRow { name: s!("Jam"), price_text: s!("$6 pint") }]);
    }

    #[test]
    fn small_is_not_cut_to_sm() {
        let out = split_sizes("Cake", "$3 small or $5 large");
        assert_eq!(out[0].name, "Cake (small)");
        assert_eq!(out[1].name, "Cake (large)");
    }
}
