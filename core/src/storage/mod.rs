//! # Storage Module
//!
//! Where the transaction list gets its records from.
//!
//! - **traits**: the [`TransactionSource`] abstraction
//! - **sample_data**: bundled demo records and dashboard alerts

pub mod sample_data;
pub mod traits;

pub use sample_data::{sample_alerts, sample_transactions, SampleTransactionSource};
pub use traits::TransactionSource;
