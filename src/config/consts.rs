// src/config/consts.rs

// Shop defaults
pub const DEFAULT_SHOP_NAME: &str = "Core Goods";
pub const DEFAULT_ORDER_EMAIL: &str = "coregoodsoc@gmail.com";
pub const DEFAULT_EMAIL_SUBJECT: &str = "Order for Pickup";

// Export
pub const DEFAULT_OUT_FILE: &str = "core_goods_menu.html";
pub const UNPRICED_LABEL: &str = "See details";

// Local log
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Row classification
pub const SECTION_MIN_LEN: usize = 4;
pub const TABLE_HEADER_PREFIX: &str = "item";
pub const SECTION_ID_DEDUP_SUFFIX: &str = "-x";

/// Rows containing any of these (lowercased) are sheet chrome, not products.
pub const SKIP_PHRASES: &[&str] = &[
    "week of",
    "turn your phone",
    "update this list",
    "items run out",
    "tax included",
    "easier to view",
];

/// Size words that split one row into several products ("$4 pt / $7 qt").
pub const SIZE_LABELS: &[&str] = &[
    "sm", "lg", "small", "large", "pt", "qt", "pint", "quart", "half", "whole",
];

/// Note keyword → (badge label, colour). Table order is render order.
pub const BADGES: &[(&str, &str, &str)] = &[
    ("gluten-free", "GF",   "#e67c23"),
    ("gf",          "GF",   "#e67c23"),
    ("vegan",       "V",    "#27ae60"),
    ("organic",     "Org",  "#2980b9"),
    ("local",       "Loc",  "#8e44ad"),
    ("dairy-free",  "DF",   "#c0392b"),
    ("keto",        "Keto", "#16a085"),
];
