//! Group records.

use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient};

use super::ObjectApi;

/// API wrapper for group objects. Groups are created in the app; the
/// API only reads and deletes them.
#[derive(Debug)]
pub struct Groups<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Groups<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Group", "Groups"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Groups<'_, H, S> {
    /// Retrieves a single group. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves groups matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching groups page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the group object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Deletes a single group. Requires `id`.
    pub async fn delete_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_single(params).await
    }
}
