//! Built-in sample data for demos and offline development.

use async_trait::async_trait;
use log::debug;
use shared::{DashboardAlert, Severity, TransactionId, TransactionRecord, UserScope};

use crate::error::DataSourceError;
use crate::storage::traits::TransactionSource;

/// Seven transactions from the first half of May 2025, newest first
pub fn sample_transactions() -> Vec<TransactionRecord> {
    let rows: [(i64, &str, &str, f64, &str); 7] = [
        (1, "2025-05-15", "Grocery Shopping", -120.50, "groceries"),
        (2, "2025-05-14", "Salary", 3000.00, "income"),
        (3, "2025-05-12", "Electric Bill", -85.75, "utilities"),
        (4, "2025-05-10", "Movie Tickets", -24.99, "entertainment"),
        (5, "2025-05-08", "Gas", -45.00, "transportation"),
        (6, "2025-05-05", "Doctor Visit", -60.00, "healthcare"),
        (7, "2025-05-01", "Internet Bill", -79.99, "utilities"),
    ];

    rows.into_iter()
        .map(|(id, date, description, amount, category)| TransactionRecord {
            id: TransactionId::Number(id),
            date: date.to_string(),
            description: description.to_string(),
            amount,
            category: category.to_string(),
        })
        .collect()
}

/// Alerts shown on top of the dashboard until real alerting exists
pub fn sample_alerts() -> Vec<DashboardAlert> {
    vec![
        DashboardAlert {
            id: 1,
            severity: Severity::Warning,
            message: "You are close to your monthly budget limit".to_string(),
        },
        DashboardAlert {
            id: 2,
            severity: Severity::Info,
            message: "Remember to categorize your recent transactions".to_string(),
        },
    ]
}

/// Serves a fixed in-memory list, whatever the user scope
#[derive(Debug, Clone)]
pub struct SampleTransactionSource {
    records: Vec<TransactionRecord>,
}

impl SampleTransactionSource {
    pub fn new() -> Self {
        Self::with_records(sample_transactions())
    }

    pub fn with_records(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }
}

impl Default for SampleTransactionSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl TransactionSource for SampleTransactionSource {
    async fn fetch_transactions(&self, scope: &UserScope) -> Result<Vec<TransactionRecord>, DataSourceError> {
        debug!("Serving {} sample transactions to {:?}", self.records.len(), scope.user_id);
        Ok(self.records.clone())
    }
}
