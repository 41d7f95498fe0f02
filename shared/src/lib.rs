use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category value that gets income styling instead of the neutral chip
pub const INCOME_CATEGORY: &str = "income";

/// Category filter value that matches every record
pub const ALL_CATEGORIES: &str = "all";

/// Date format used by transaction records ("2025-05-15")
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifier of a transaction record.
///
/// Records coming from the sample data carry integer ids, records coming
/// from a remote API may carry string ids. Both serialize as bare JSON values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(i64),
    Text(String),
}

impl TransactionId {
    /// Numeric value of the id, if it has one
    pub fn as_number(&self) -> Option<i64> {
        match self {
            TransactionId::Number(n) => Some(*n),
            TransactionId::Text(text) => text.parse().ok(),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(n) => write!(f, "{}", n),
            TransactionId::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        TransactionId::Number(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        TransactionId::Text(value.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        TransactionId::Text(value)
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TransactionId,
    /// Effective date, ISO 8601 ("YYYY-MM-DD")
    pub date: String,
    /// Free-text label shown in the table and matched by search
    pub description: String,
    /// Signed amount (negative for expense, zero or positive for income)
    pub amount: f64,
    /// Open-ended category name; "income" is reserved
    pub category: String,
}

impl TransactionRecord {
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_income_category(&self) -> bool {
        self.category == INCOME_CATEGORY
    }

    /// Parse the record date, `None` when it is not a valid calendar date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, RECORD_DATE_FORMAT).ok()
    }
}

/// Whose transactions a data source should return
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScope {
    /// Signed-in user; `None` means the single local user
    pub user_id: Option<String>,
}

impl UserScope {
    pub fn current_user() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}

/// Response body of `GET /api/transactions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionRecord>,
}

/// Severity of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    /// CSS modifier used by the snackbar and alert components
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "severity-success",
            Severity::Warning => "severity-warning",
            Severity::Error => "severity-error",
            Severity::Info => "severity-info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Alert shown above the dashboard content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAlert {
    pub id: u32,
    pub severity: Severity,
    pub message: String,
}

/// Type of transaction amount for styling and display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

/// Styling of the category chip in the transaction table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryStyle {
    Income,
    Neutral,
}

/// A transaction formatted for one table row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRow {
    pub id: TransactionId,
    pub formatted_date: String,
    pub description: String,
    pub category_label: String,
    pub category_style: CategoryStyle,
    pub formatted_amount: String,
    pub amount_type: AmountType,
    pub raw_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: TransactionId, amount: f64, category: &str) -> TransactionRecord {
        TransactionRecord {
            id,
            date: "2025-05-14".to_string(),
            description: "Salary".to_string(),
            amount,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_transaction_id_serializes_untagged() {
        let numeric = serde_json::to_string(&TransactionId::Number(7)).unwrap();
        assert_eq!(numeric, "7");

        let text = serde_json::to_string(&TransactionId::from("tx-7")).unwrap();
        assert_eq!(text, "\"tx-7\"");

        let parsed: TransactionId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, TransactionId::Number(42));
        let parsed: TransactionId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(parsed, TransactionId::Text("abc".to_string()));
    }

    #[test]
    fn test_transaction_id_as_number() {
        assert_eq!(TransactionId::Number(3).as_number(), Some(3));
        assert_eq!(TransactionId::from("12").as_number(), Some(12));
        assert_eq!(TransactionId::from("tx-1").as_number(), None);
    }

    #[test]
    fn test_record_classification() {
        let salary = record(2.into(), 3000.0, "income");
        assert!(!salary.is_expense());
        assert!(salary.is_income_category());

        let groceries = record(1.into(), -120.5, "groceries");
        assert!(groceries.is_expense());
        assert!(!groceries.is_income_category());

        let refund = record(8.into(), 0.0, "other");
        assert!(!refund.is_expense());
    }

    #[test]
    fn test_record_parsed_date() {
        let mut rec = record(1.into(), -1.0, "other");
        assert_eq!(rec.parsed_date(), NaiveDate::from_ymd_opt(2025, 5, 14));

        rec.date = "2025-13-40".to_string();
        assert_eq!(rec.parsed_date(), None);
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{"id":1,"date":"2025-05-15","description":"Grocery Shopping","amount":-120.5,"category":"groceries"}"#;
        let rec: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, TransactionId::Number(1));
        assert_eq!(rec.amount, -120.5);
        assert_eq!(rec.category, "groceries");
    }

    #[test]
    fn test_severity_lowercase_serde() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        let parsed: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, Severity::Warning);
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
