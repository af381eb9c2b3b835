//! Purchase records.

use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient};

use super::ObjectApi;

/// Read-only API wrapper for purchase objects.
#[derive(Debug)]
pub struct Purchases<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Purchases<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Purchase", "Purchases"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Purchases<'_, H, S> {
    /// Retrieves a single purchase. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves purchases matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching purchases page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the purchase object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }
}
