// src/render/mod.rs
//! Builds the single-file ordering page from a [`Menu`].
//!
//! Markup for sections and items is generated here; the page shell, styles and
//! cart script are static assets compiled into the binary. All sheet text is
//! escaped before it reaches the page.

mod badges;

pub use badges::{Badge, badge_html, badges_for};

use std::collections::HashMap;

use serde::Serialize;

use crate::config::consts::UNPRICED_LABEL;
use crate::config::options::PageOptions;
use crate::core::sanitize::{alnum_only, escape_html};
use crate::menu::{Entry, Menu, MenuItem, Section};

const SHELL: &str = include_str!("assets/shell.html");
const STYLE: &str = include_str!("assets/menu.css");
const SCRIPT: &str = include_str!("assets/menu.js");

/// Data the cart script reads at startup (`const MENU = ...`).
#[derive(Serialize)]
struct ScriptConfig<'a> {
    sections: &'a [&'a Section],
    shop: &'a str,
    email: &'a str,
    subject: &'a str,
}

pub fn render_page(menu: &Menu, opts: &PageOptions) -> String {
    let body = render_body(menu);

    let sections: Vec<&Section> = menu.sections().collect();
    let config = ScriptConfig {
        sections: &sections,
        shop: opts.shop_name.trim(),
        email: opts.order_email.trim(),
        subject: &opts.email_subject,
    };

    fill(SHELL, &[
        ("TITLE", escape_html(&opts.title())),
        ("STYLE", s!(STYLE)),
        ("BODY", body),
        ("CONFIG", script_json(&config)),
        ("SCRIPT", s!(SCRIPT)),
    ])
}

/// Section headings and item rows, in sheet order.
pub fn render_body(menu: &Menu) -> String {
    let mut ids = ControlIds::default();
    let mut out = String::new();
    for entry in menu.entries() {
        match entry {
            Entry::Section(section) => out.push_str(&render_section(section)),
            Entry::Item(item) => out.push_str(&render_item(item, &mut ids)),
        }
    }
    out
}

pub fn render_section(section: &Section) -> String {
    format!(
        "<h2 id=\"{}\" class=\"cg-section-title\">{}</h2>\n",
        escape_html(&section.id),
        escape_html(&section.title)
    )
}

pub fn render_item(item: &MenuItem, ids: &mut ControlIds) -> String {
    let display_price = if item.price_text.is_empty() { UNPRICED_LABEL } else { item.price_text.as_str() };
    let priced = item.price.is_priceable();
    let price_class = if priced { "cg-price" } else { "cg-price unknown" };

    let search = join!(&item.name.to_lowercase(), " ", &item.notes.to_lowercase());

    let mut meta = escape_html(&item.notes);
    for badge in badges_for(&item.notes) {
        meta.push(' ');
        meta.push_str(&badge_html(badge));
    }

    let control = if priced {
        let id = ids.next(&item.name);
        format!(
            concat!(
                "    <div class=\"cg-qty-wrapper\" id=\"{id}\" data-ctrl=\"{id}\" data-name=\"{name}\" ",
                "data-p=\"{p}\" data-bp=\"{bp}\" data-bt=\"{bt}\" data-r=\"{r}\">\n",
                "        <button class=\"cg-add-btn\" type=\"button\" data-delta=\"1\">+</button>\n",
                "    </div>\n",
            ),
            id = id,
            name = escape_html(&item.name),
            p = item.price.standard,
            bp = item.price.bulk,
            bt = item.price.threshold,
            r = escape_html(display_price),
        )
    } else {
        s!()
    };

    format!(
        concat!(
            "<div class=\"cg-item-row\" data-search=\"{search}\">\n",
            "    <div class=\"cg-item-info\">\n",
            "        <span class=\"cg-name\">{name}</span>\n",
            "        <span class=\"cg-meta\">{meta}</span>\n",
            "        <span class=\"{class}\">{price}</span>\n",
            "    </div>\n",
            "{control}",
            "</div>\n",
        ),
        search = escape_html(&search),
        name = escape_html(&item.name),
        meta = meta,
        class = price_class,
        price = escape_html(display_price),
        control = control,
    )
}

/// Hands out `ctrl-<alnum name>` ids, suffixing repeats so every control is unique.
#[derive(Default)]
pub struct ControlIds {
    seen: HashMap<String, usize>,
}

impl ControlIds {
    pub fn next(&mut self, name: &str) -> String {
        let base = join!("ctrl-", &alnum_only(name));
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 { base } else { format!("{base}-{count}") }
    }
}

/// JSON safe to drop inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(e) => {
            loge!("Render: script config not serialisable: {e}");
            s!("{\"sections\":[],\"shop\":\"\",\"email\":\"\",\"subject\":\"\"}")
        }
    }
}

/// Replace `@@KEY@@` markers in one pass; substituted text is never rescanned.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;
    while let Some(start) = rest.find("@@") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("@@") else { break };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, v)) => {
                out.push_str(&rest[..start]);
                out.push_str(v);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_single_pass() {
        let out = fill("<@@A@@|@@B@@>", &[("A", s!("@@B@@")), ("B", s!("b"))]);
        assert_eq!(out, "<@@B@@|b>");
    }

    #[test]
    fn fill_keeps_unknown_markers() {
        assert_eq!(fill("x@@NOPE@@y", &[]), "x@@NOPE@@y");
    }

    #[test]
    fn control_ids_are_unique() {
        let mut ids = ControlIds::default();
        assert_eq!(ids.next("Mom's Pie"), "ctrl-MomsPie");
        assert_eq!(ids.next("Moms Pie"), "ctrl-MomsPie-2");
    }

    #[test]
    fn script_json_cannot_close_the_script() {
        let json = script_json(&vec!["</script><b>"]);
        assert!(!json.contains("</script>"));
    }
}
