// src/render/badges.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::BADGES;

pub struct Badge {
    pub label: &'static str,
    pub color: &'static str,
}

/// Keyword patterns compiled once, in table order.
static BADGE_RULES: LazyLock<Vec<(Regex, Badge)>> = LazyLock::new(|| {
    BADGES
        .iter()
        .map(|&(key, label, color)| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(key))).unwrap();
            (re, Badge { label, color })
        })
        .collect()
});

/// Badges whose keyword appears as a whole word in `notes`.
pub fn badges_for(notes: &str) -> Vec<&'static Badge> {
    BADGE_RULES
        .iter()
        .filter(|(re, _)| re.is_match(notes))
        .map(|(_, badge)| badge)
        .collect()
}

pub fn badge_html(badge: &Badge) -> String {
    format!(
        "<span class='cg-badge' style='background-color:{}'>{}</span>",
        badge.color, badge.label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(notes: &str) -> Vec<&'static str> {
        badges_for(notes).iter().map(|b| b.label).collect()
    }

    #[test]
    fn whole_words_only() {
        assert_eq!(labels("Vegan Gluten-Free Cookies"), vec!["GF", "V"]);
        assert!(labels("Locally grown").is_empty());
        assert_eq!(labels("local honey"), vec!["Loc"]);
    }

    #[test]
    fn gf_and_gluten_free_both_fire() {
        assert_eq!(labels("gluten-free (GF) bread"), vec!["GF", "GF"]);
    }

    #[test]
    fn html_carries_colour() {
        let html = badge_html(badges_for("keto")[0]);
        assert_eq!(html, "<span class='cg-badge' style='background-color:#16a085'>Keto</span>");
    }
}
