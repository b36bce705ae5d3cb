// src/cart.rs
//! Reference implementation of the in-page cart arithmetic.
//!
//! The generated page does this in JavaScript (`render/assets/menu.js`); the
//! rules here are the same and are what the tests pin down:
//! bulk price once `qty >= threshold` (only when a threshold exists), each line
//! rounded to whole cents, lines summed in cents.

use crate::price::PriceInfo;

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    /// Control id of the page row this line belongs to (`ctrl-...`)
    pub id: String,
    pub name: String,
    pub price: PriceInfo,
    pub qty: u32,
}

impl CartLine {
    pub fn unit_price(&self) -> f64 {
        self.price.unit_price(self.qty)
    }

    pub fn is_bulk(&self) -> bool {
        self.unit_price() < self.price.standard
    }

    pub fn total_cents(&self) -> i64 {
        line_total_cents(&self.price, self.qty)
    }
}

/// `round(unit * qty * 100)`, the same rounding the page applies per line.
pub fn line_total_cents(price: &PriceInfo, qty: u32) -> i64 {
    (price.unit_price(qty) * f64::from(qty) * 100.0).round() as i64
}

/// `1234` → `"12.34"`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let c = cents.unsigned_abs();
    format!("{sign}{}.{:02}", c / 100, c % 100)
}

/// Insertion-ordered cart keyed by control id, like the page script. Two rows
/// sharing a name (same product in two sections) stay separate lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the quantity of control `id` by `delta`; lines reaching zero are
    /// removed. Unpriced items are never added.
    pub fn add(&mut self, id: &str, name: &str, price: PriceInfo, delta: i32) {
        if !price.is_priceable() {
            return;
        }
        match self.lines.iter().position(|l| l.id == id) {
            Some(ix) => {
                let qty = i64::from(self.lines[ix].qty) + i64::from(delta);
                if qty <= 0 {
                    self.lines.remove(ix);
                } else {
                    self.lines[ix].qty = u32::try_from(qty).unwrap_or(u32::MAX);
                }
            }
            None if delta > 0 => {
                self.lines.push(CartLine { id: s!(id), name: s!(name), price, qty: delta.unsigned_abs() });
            }
            None => {}
        }
    }

    pub fn set_qty(&mut self, id: &str, qty: u32) {
        if qty == 0 {
            self.remove(id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.qty = qty;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (the badge on the checkout bar).
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.qty)).sum()
    }

    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(CartLine::total_cents).fold(0, i64::saturating_add)
    }

    /// Plain-text order for the checkout e-mail.
    pub fn order_email_body(&self, shop_name: &str) -> String {
        let mut body = format!("Hi {shop_name},\n\nI'd like to place an order for pickup:\n\n");
        for line in &self.lines {
            let unit = line.unit_price();
            let label = if line.is_bulk() { " (BULK)" } else { "" };
            body.push_str(&format!("- [{}x] {} @ ${:.2}{}\n", line.qty, line.name, unit, label));
        }
        body.push_str(&format!("\nEstimated Total: ${}\n\nThanks!", format_cents(self.total_cents())));
        body
    }
}
