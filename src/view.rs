//! Declarative description of the cart panel.
//!
//! The view is derived entirely from the cart contents and the running
//! total. Nothing here touches the terminal; the `ui` module draws it and
//! [`render_plain`] turns it into text for the exit summary.

use crate::cart::Control;
use crate::model::{BoothId, CartItem};

pub const EMPTY_CART_TEXT: &str = "No booths selected";
pub const DEFAULT_CURRENCY: &str = "KD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLabels {
    pub currency: String,
}

impl Default for ViewLabels {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: BoothId,
    pub label: String,
    pub price_text: String,
    pub remove: Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub placeholder: Option<&'static str>,
    pub currency: String,
    pub total: u64,
    pub total_text: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn build_view(items: &[CartItem], total: u64, labels: &ViewLabels) -> CartView {
    let rows: Vec<CartRow> = items
        .iter()
        .map(|item| CartRow {
            id: item.id.clone(),
            label: format!("Booth {}", item.id),
            price_text: format!("{} {}", labels.currency, item.price),
            remove: Control::RemoveItem(item.id.clone()),
        })
        .collect();

    let placeholder = rows.is_empty().then_some(EMPTY_CART_TEXT);

    CartView {
        rows,
        placeholder,
        currency: labels.currency.clone(),
        total,
        total_text: total.to_string(),
    }
}

pub fn render_plain(view: &CartView) -> String {
    let mut lines = Vec::new();

    if let Some(text) = view.placeholder {
        lines.push(text.to_string());
    }

    let label_width = view
        .rows
        .iter()
        .map(|row| unicode_width::UnicodeWidthStr::width(row.label.as_str()))
        .max()
        .unwrap_or(0);

    for row in &view.rows {
        let pad = label_width - unicode_width::UnicodeWidthStr::width(row.label.as_str());
        lines.push(format!("{}{}  {}", row.label, " ".repeat(pad), row.price_text));
    }

    lines.push(format!("Total: {} {}", view.currency, view.total_text));
    lines.join("\n")
}
