//! # Storage Traits
//!
//! The transaction list never knows where its records come from. Anything
//! that can produce the full collection for a user implements
//! [`TransactionSource`]: the bundled sample data or the remote API
//! client in the frontend.

use async_trait::async_trait;
use shared::{TransactionRecord, UserScope};

use crate::error::DataSourceError;

/// Source of the working set of a transaction list.
///
/// Declared `?Send` because browser HTTP futures are not `Send`; every
/// implementation is driven from a single thread.
#[async_trait(?Send)]
pub trait TransactionSource {
    /// Fetch every transaction visible to `scope`, in display order
    async fn fetch_transactions(&self, scope: &UserScope) -> Result<Vec<TransactionRecord>, DataSourceError>;
}
