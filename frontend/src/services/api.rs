use async_trait::async_trait;
use fms_core::{DataSourceError, TransactionSource};
use gloo::net::http::Request;
use shared::{TransactionListResponse, TransactionRecord, UserScope};

use crate::services::logging::Logger;

/// API client for communicating with the finance backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn transactions_url(&self, scope: &UserScope) -> String {
        match &scope.user_id {
            Some(user) => format!("{}/api/transactions?user={}", self.base_url, encode_query_value(user)),
            None => format!("{}/api/transactions", self.base_url),
        }
    }

    /// Get every transaction of the user in scope
    pub async fn get_transactions(&self, scope: &UserScope) -> Result<TransactionListResponse, DataSourceError> {
        let url = self.transactions_url(scope);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DataSourceError::Network(e.to_string()))?;

        if !response.ok() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DataSourceError::Server {
                status: response.status(),
                message,
            });
        }

        response
            .json::<TransactionListResponse>()
            .await
            .map_err(|e| DataSourceError::Parse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TransactionSource for ApiClient {
    async fn fetch_transactions(&self, scope: &UserScope) -> Result<Vec<TransactionRecord>, DataSourceError> {
        Logger::debug_with_component("ApiClient", &format!("GET {}", self.transactions_url(scope)));
        self.get_transactions(scope).await.map(|data| data.transactions)
    }
}

fn encode_query_value(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_transactions_url() {
        let client = ApiClient::with_base_url("http://localhost:3000/");
        assert_eq!(
            client.transactions_url(&UserScope::current_user()),
            "http://localhost:3000/api/transactions"
        );
        assert_eq!(
            client.transactions_url(&UserScope::for_user("ana maria")),
            "http://localhost:3000/api/transactions?user=ana%20maria"
        );
    }
}
