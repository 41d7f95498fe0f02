//! Error types shared across the crate.

use thiserror::Error;

/// Failure to obtain transactions from a data source.
///
/// None of these are fatal: the view reacts by emptying its working set and
/// raising an error notification.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("failed to parse transactions: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
