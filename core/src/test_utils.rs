//! Helpers shared by the unit tests of this crate.

use shared::{TransactionId, TransactionRecord};

/// Route `log` output through the test harness; safe to call repeatedly.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn record(id: i64, date: &str, description: &str, amount: f64, category: &str) -> TransactionRecord {
    TransactionRecord {
        id: TransactionId::Number(id),
        date: date.to_string(),
        description: description.to_string(),
        amount,
        category: category.to_string(),
    }
}

/// Ids of the given records, in order
pub fn ids(records: &[TransactionRecord]) -> Vec<i64> {
    records
        .iter()
        .filter_map(|r| r.id.as_number())
        .collect()
}

/// `count` expense records numbered from 1, all in the "other" category
pub fn numbered_records(count: i64) -> Vec<TransactionRecord> {
    (1..=count)
        .map(|i| record(i, "2025-05-01", &format!("Item {}", i), -(i as f64), "other"))
        .collect()
}
