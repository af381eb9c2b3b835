//! Purchase history log records.

use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient};

use super::ObjectApi;

/// Read-only API wrapper for purchase history logs.
#[derive(Debug)]
pub struct PurchaseLogs<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> PurchaseLogs<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "PurchaseHistoryLog", "PurchaseHistoryLogs"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> PurchaseLogs<'_, H, S> {
    /// Retrieves a single log entry. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves log entries matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching log entries page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the purchase log object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }
}
