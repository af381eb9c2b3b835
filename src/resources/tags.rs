//! Tag records.

use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient};

use super::ObjectApi;

/// API wrapper for tag objects.
#[derive(Debug)]
pub struct Tags<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Tags<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Tag", "Tags"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Tags<'_, H, S> {
    /// Retrieves a single tag. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves tags matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching tags page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the tag object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Creates a tag.
    pub async fn create(&self, params: Value) -> Result<String, ApiError> {
        self.api.create(params).await
    }

    /// Updates a tag. Requires `id`.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        self.api.update(params).await
    }

    /// Deletes a single tag. Requires `id`.
    pub async fn delete_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_single(params).await
    }

    /// Deletes tags matching the given criteria.
    pub async fn delete_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_multiple(params).await
    }
}
