//! Application configuration.
//!
//! Every field has a default, so a JSON document only needs the keys it
//! wants to override.

use serde::{Deserialize, Serialize};

use crate::domain::transaction_filter::{FilterState, DEFAULT_ROWS_PER_PAGE};
use crate::error::ConfigError;
use crate::io::notifications::{NotificationQueue, DEFAULT_AUTO_HIDE_MS, DEFAULT_MAX_VISIBLE};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Serve the bundled sample transactions instead of calling the API
    pub use_sample_data: bool,
    /// Artificial latency of the sample source, in milliseconds
    pub sample_delay_ms: u32,
    pub default_rows_per_page: usize,
    pub rows_per_page_options: Vec<usize>,
    /// Category filter choices, "all" first
    pub categories: Vec<String>,
    pub max_visible_notifications: usize,
    pub notification_auto_hide_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            use_sample_data: true,
            sample_delay_ms: 500,
            default_rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: vec![5, 10, 25],
            categories: [
                "all",
                "income",
                "groceries",
                "utilities",
                "entertainment",
                "transportation",
                "healthcare",
                "other",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            max_visible_notifications: DEFAULT_MAX_VISIBLE,
            notification_auto_hide_ms: DEFAULT_AUTO_HIDE_MS,
        }
    }
}

impl AppConfig {
    /// Overlay `json` on the defaults and check the result
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_rows_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "default_rows_per_page",
                reason: "must be positive".to_string(),
            });
        }
        if self.rows_per_page_options.iter().any(|n| *n == 0) {
            return Err(ConfigError::InvalidValue {
                field: "rows_per_page_options",
                reason: "page sizes must be positive".to_string(),
            });
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_api_base_url(self, api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..self
        }
    }

    /// Initial filter state of a freshly mounted transaction list
    pub fn initial_filter(&self) -> FilterState {
        FilterState::new(self.default_rows_per_page)
    }

    /// Page size choices, always including the default
    pub fn page_size_options(&self) -> Vec<usize> {
        let mut options = self.rows_per_page_options.clone();
        if !options.contains(&self.default_rows_per_page) {
            options.push(self.default_rows_per_page);
        }
        options.sort_unstable();
        options.dedup();
        options
    }

    pub fn notification_queue(&self) -> NotificationQueue {
        NotificationQueue::new(self.max_visible_notifications, self.notification_auto_hide_ms)
    }
}
