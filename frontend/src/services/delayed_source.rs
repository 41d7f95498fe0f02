use async_trait::async_trait;
use fms_core::{DataSourceError, TransactionSource};
use gloo::timers::future::TimeoutFuture;
use shared::{TransactionRecord, UserScope};
use std::rc::Rc;

/// Wraps a source and answers only after `delay_ms`, like a slow network
pub struct DelayedSource {
    inner: Rc<dyn TransactionSource>,
    delay_ms: u32,
}

impl DelayedSource {
    pub fn new(inner: Rc<dyn TransactionSource>, delay_ms: u32) -> Self {
        Self { inner, delay_ms }
    }
}

#[async_trait(?Send)]
impl TransactionSource for DelayedSource {
    async fn fetch_transactions(&self, scope: &UserScope) -> Result<Vec<TransactionRecord>, DataSourceError> {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        self.inner.fetch_transactions(scope).await
    }
}

/// A data source handle that can sit in component properties
#[derive(Clone)]
pub struct SharedSource(pub Rc<dyn TransactionSource>);

impl PartialEq for SharedSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
