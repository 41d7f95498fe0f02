//! Add/edit transaction form logic.
//!
//! The form collects an unsigned amount plus an expense/income toggle; the
//! sign is applied only when the validated form is turned into a
//! [`TransactionDraft`]. The UI renders fields and error text, everything
//! else happens here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{TransactionId, TransactionRecord, INCOME_CATEGORY, RECORD_DATE_FORMAT};
use thiserror::Error;

use crate::domain::transaction_table::category_label;

pub const MAX_DESCRIPTION_LENGTH: usize = 256;
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Whether the entered amount is money going out or coming in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

impl TransactionKind {
    pub fn toggled(self) -> Self {
        match self {
            TransactionKind::Expense => TransactionKind::Income,
            TransactionKind::Income => TransactionKind::Expense,
        }
    }

    /// Apply this kind's sign to an unsigned amount
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Expense => -amount.abs(),
            TransactionKind::Income => amount.abs(),
        }
    }

    pub fn of_amount(amount: f64) -> Self {
        if amount < 0.0 {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Expense => "Expense",
            TransactionKind::Income => "Income",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Amount,
    Category,
    Description,
    Date,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormValidationError {
    #[error("Required")]
    AmountRequired,
    #[error("Enter a valid amount like 5 or 5.00")]
    InvalidAmount(String),
    #[error("Must be positive")]
    AmountNotPositive,
    #[error("Use at most 2 decimal places")]
    AmountPrecisionTooHigh,
    #[error("Maximum amount is ${max:.2}")]
    AmountTooLarge { max: f64 },
    #[error("Required")]
    CategoryRequired,
    #[error("Description is too long ({0} characters)")]
    DescriptionTooLong(usize),
    #[error("Enter a date as YYYY-MM-DD")]
    InvalidDate(String),
}

impl FormValidationError {
    pub fn field(&self) -> FormField {
        match self {
            FormValidationError::AmountRequired
            | FormValidationError::InvalidAmount(_)
            | FormValidationError::AmountNotPositive
            | FormValidationError::AmountPrecisionTooHigh
            | FormValidationError::AmountTooLarge { .. } => FormField::Amount,
            FormValidationError::CategoryRequired => FormField::Category,
            FormValidationError::DescriptionTooLong(_) => FormField::Description,
            FormValidationError::InvalidDate(_) => FormField::Date,
        }
    }
}

/// A validated, signed transaction that has no id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl TransactionDraft {
    pub fn into_record(self, id: TransactionId) -> TransactionRecord {
        TransactionRecord {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            category: self.category,
        }
    }
}

/// Raw input of the add/edit transaction form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionFormState {
    pub amount_input: String,
    pub category: String,
    pub description: String,
    pub date: String,
    pub kind: TransactionKind,
}

impl TransactionFormState {
    /// Empty expense form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format(RECORD_DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Pre-fill the form with an existing record for editing
    pub fn from_record(record: &TransactionRecord) -> Self {
        Self {
            amount_input: format!("{:.2}", record.amount.abs()),
            category: record.category.clone(),
            description: record.description.clone(),
            date: record.date.clone(),
            kind: TransactionKind::of_amount(record.amount),
        }
    }

    /// Flip between expense and income
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    /// Picking the "income" category switches the form to income
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        if self.category == INCOME_CATEGORY {
            self.kind = TransactionKind::Income;
        }
    }

    pub fn validate(&self) -> Result<TransactionDraft, Vec<FormValidationError>> {
        let mut errors = Vec::new();

        let amount = match parse_amount(&self.amount_input) {
            Ok(amount) => Some(amount),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let category = self.category.trim();
        if category.is_empty() {
            errors.push(FormValidationError::CategoryRequired);
        }

        let description = self.description.trim();
        let description_len = description.chars().count();
        if description_len > MAX_DESCRIPTION_LENGTH {
            errors.push(FormValidationError::DescriptionTooLong(description_len));
        }

        let date = self.date.trim();
        if NaiveDate::parse_from_str(date, RECORD_DATE_FORMAT).is_err() {
            errors.push(FormValidationError::InvalidDate(date.to_string()));
        }

        match amount {
            Some(amount) if errors.is_empty() => Ok(TransactionDraft {
                date: date.to_string(),
                description: if description.is_empty() {
                    category_label(category)
                } else {
                    description.to_string()
                },
                amount: self.kind.signed(amount),
                category: category.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// First error message for `field`, for helper text under the input
pub fn error_for(errors: &[FormValidationError], field: FormField) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field() == field)
        .map(|e| e.to_string())
}

/// Parse a user-typed amount; `$`, `,` and spaces are ignored
pub fn parse_amount(input: &str) -> Result<f64, FormValidationError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    if cleaned.is_empty() {
        return Err(FormValidationError::AmountRequired);
    }

    let amount = cleaned
        .parse::<f64>()
        .map_err(|e| FormValidationError::InvalidAmount(e.to_string()))?;

    if !amount.is_finite() {
        return Err(FormValidationError::InvalidAmount(cleaned));
    }
    if amount <= 0.0 {
        return Err(FormValidationError::AmountNotPositive);
    }
    if let Some((_, fraction)) = cleaned.split_once('.') {
        if fraction.trim_end_matches('0').len() > 2 {
            return Err(FormValidationError::AmountPrecisionTooHigh);
        }
    }
    if amount > MAX_AMOUNT {
        return Err(FormValidationError::AmountTooLarge { max: MAX_AMOUNT });
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> TransactionFormState {
        TransactionFormState {
            amount_input: "45.00".to_string(),
            category: "transportation".to_string(),
            description: "Gas".to_string(),
            date: "2025-05-08".to_string(),
            kind: TransactionKind::Expense,
        }
    }

    #[test]
    fn test_new_form_is_dated_today_and_expense() {
        let form = TransactionFormState::new(NaiveDate::from_ymd_opt(2025, 5, 15).unwrap());
        assert_eq!(form.date, "2025-05-15");
        assert_eq!(form.kind, TransactionKind::Expense);
        assert!(form.amount_input.is_empty());
    }

    #[test]
    fn test_expense_draft_is_negative() {
        let draft = filled_form().validate().unwrap();
        assert_eq!(draft.amount, -45.0);
        assert_eq!(draft.description, "Gas");
        assert_eq!(draft.category, "transportation");
    }

    #[test]
    fn test_toggle_flips_sign() {
        let mut form = filled_form();
        form.toggle_kind();
        assert_eq!(form.kind, TransactionKind::Income);
        assert_eq!(form.validate().unwrap().amount, 45.0);

        form.toggle_kind();
        assert_eq!(form.validate().unwrap().amount, -45.0);
    }

    #[test]
    fn test_income_category_switches_kind() {
        let mut form = filled_form();
        form.set_category("income");
        assert_eq!(form.kind, TransactionKind::Income);

        // Leaving the income category keeps whatever the user picked
        form.set_category("other");
        assert_eq!(form.kind, TransactionKind::Income);
    }

    #[test]
    fn test_missing_amount_and_category() {
        let form = TransactionFormState {
            amount_input: "  ".to_string(),
            category: String::new(),
            ..filled_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![FormValidationError::AmountRequired, FormValidationError::CategoryRequired]
        );
        assert_eq!(error_for(&errors, FormField::Amount), Some("Required".to_string()));
        assert_eq!(error_for(&errors, FormField::Category), Some("Required".to_string()));
        assert_eq!(error_for(&errors, FormField::Description), None);
    }

    #[test]
    fn test_parse_amount_cleans_input() {
        assert_eq!(parse_amount("10.50").unwrap(), 10.5);
        assert_eq!(parse_amount("$1,200.00").unwrap(), 1200.0);
        assert_eq!(parse_amount(" 3 ").unwrap(), 3.0);
        assert_eq!(parse_amount("2.500").unwrap(), 2.5);
    }

    #[test]
    fn test_parse_amount_rejections() {
        assert_eq!(parse_amount(""), Err(FormValidationError::AmountRequired));
        assert_eq!(parse_amount("$"), Err(FormValidationError::AmountRequired));
        assert!(matches!(parse_amount("abc"), Err(FormValidationError::InvalidAmount(_))));
        assert!(matches!(parse_amount("inf"), Err(FormValidationError::InvalidAmount(_))));
        assert_eq!(parse_amount("0"), Err(FormValidationError::AmountNotPositive));
        assert_eq!(parse_amount("-5"), Err(FormValidationError::AmountNotPositive));
        assert_eq!(parse_amount("1.234"), Err(FormValidationError::AmountPrecisionTooHigh));
        assert_eq!(
            parse_amount("2000000"),
            Err(FormValidationError::AmountTooLarge { max: MAX_AMOUNT })
        );
    }

    #[test]
    fn test_empty_description_falls_back_to_category_label() {
        let form = TransactionFormState {
            description: "   ".to_string(),
            ..filled_form()
        };
        assert_eq!(form.validate().unwrap().description, "Transportation");
    }

    #[test]
    fn test_description_too_long() {
        let form = TransactionFormState {
            description: "x".repeat(MAX_DESCRIPTION_LENGTH + 1),
            ..filled_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors, vec![FormValidationError::DescriptionTooLong(257)]);
    }

    #[test]
    fn test_invalid_date() {
        let form = TransactionFormState {
            date: "05/08/2025".to_string(),
            ..filled_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field(), FormField::Date);
    }

    #[test]
    fn test_edit_round_trip_keeps_sign() {
        let record = TransactionRecord {
            id: TransactionId::Number(2),
            date: "2025-05-14".to_string(),
            description: "Salary".to_string(),
            amount: 3000.0,
            category: "income".to_string(),
        };
        let mut form = TransactionFormState::from_record(&record);
        assert_eq!(form.amount_input, "3000.00");
        assert_eq!(form.kind, TransactionKind::Income);

        form.amount_input = "3100".to_string();
        let updated = form.validate().unwrap().into_record(record.id.clone());
        assert_eq!(updated.id, TransactionId::Number(2));
        assert_eq!(updated.amount, 3100.0);
    }
}
