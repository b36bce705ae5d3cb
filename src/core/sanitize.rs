// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Escape text for element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Python-style `isupper`: at least one cased char and none lowercase.
/// "BAKERY & BREAD" → true, "Bakery" → false, "2024" → false.
pub fn is_all_upper(s: &str) -> bool {
    let mut cased = false;
    for ch in s.chars() {
        if ch.is_lowercase() { return false; }
        if ch.is_uppercase() { cased = true; }
    }
    cased
}

/// Section anchor: lowercase, spaces → '-'. Other characters are kept.
pub fn section_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Keep ASCII letters and digits only ("Mom's Pie (lg)" → "MomsPielg").
pub fn alnum_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
