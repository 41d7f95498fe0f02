//! Transaction table presentation logic.
//!
//! Turns records into [`TransactionRow`]s ready for rendering: formatted
//! dates and amounts, styling hints for the amount and category cells, and
//! the caption of the pagination control.
//!
//! ## Display rules
//!
//! - Dates are shown as stored (`YYYY-MM-DD`)
//! - Amounts are shown as absolute values with two decimals; the sign is
//!   conveyed by colour
//! - The reserved "income" category gets its own chip style
//! - Category labels are capitalised ("groceries" → "Groceries")

use shared::{AmountType, CategoryStyle, TransactionRecord, TransactionRow, INCOME_CATEGORY};

use crate::domain::transaction_filter::VisibleRows;

pub const CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionTableService;

impl TransactionTableService {
    pub fn new() -> Self {
        Self
    }

    pub fn format_rows(&self, records: &[TransactionRecord]) -> Vec<TransactionRow> {
        records.iter().map(|r| self.format_row(r)).collect()
    }

    pub fn format_row(&self, record: &TransactionRecord) -> TransactionRow {
        TransactionRow {
            id: record.id.clone(),
            formatted_date: self.format_date(&record.date),
            description: record.description.clone(),
            category_label: category_label(&record.category),
            category_style: category_style(&record.category),
            formatted_amount: self.format_amount(record.amount),
            amount_type: classify_amount(record.amount),
            raw_amount: record.amount,
        }
    }

    pub fn format_date(&self, iso_date: &str) -> String {
        iso_date.trim().to_string()
    }

    /// `-120.5` → `"$120.50"`
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", CURRENCY_SYMBOL, amount.abs())
    }
}

/// Zero counts as income for colouring, like any non-negative amount
pub fn classify_amount(amount: f64) -> AmountType {
    if amount > 0.0 {
        AmountType::Positive
    } else if amount < 0.0 {
        AmountType::Negative
    } else {
        AmountType::Zero
    }
}

pub fn amount_css_class(amount_type: AmountType) -> &'static str {
    match amount_type {
        AmountType::Positive | AmountType::Zero => "amount positive",
        AmountType::Negative => "amount negative",
    }
}

pub fn category_style(category: &str) -> CategoryStyle {
    if category == INCOME_CATEGORY {
        CategoryStyle::Income
    } else {
        CategoryStyle::Neutral
    }
}

pub fn category_css_class(style: CategoryStyle) -> &'static str {
    match style {
        CategoryStyle::Income => "category-chip income",
        CategoryStyle::Neutral => "category-chip",
    }
}

/// First letter upper-cased, the rest untouched
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `(value, label)` pairs for a category select
pub fn category_options(categories: &[String]) -> Vec<(String, String)> {
    categories
        .iter()
        .map(|c| (c.clone(), category_label(c)))
        .collect()
}

/// "1–10 of 23" style caption of the pagination control.
///
/// Shows the window the page asks for, so a page left past the end of a
/// shrunken set reads e.g. "11–7 of 7".
pub fn pagination_caption(visible: &VisibleRows) -> String {
    if visible.total_count == 0 {
        return "0–0 of 0".to_string();
    }
    let start = visible.page.saturating_mul(visible.rows_per_page);
    let end = start.saturating_add(visible.rows_per_page).min(visible.total_count);
    format!("{}–{} of {}", start.saturating_add(1), end, visible.total_count)
}
