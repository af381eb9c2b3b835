//! Offer records.
//!
//! Offer payloads are produced by [`Offer`](crate::models::Offer);
//! both create and update take JSON bodies because the `data` field is
//! structured.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, ContentType, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;
use super::base::strip_id;

/// API wrapper for offer objects.
#[derive(Debug)]
pub struct Offers<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Offers<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Offer", "Offers"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Offers<'_, H, S> {
    /// Retrieves a single offer. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves offers matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching offers page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the offer object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Creates an offer. Requires `name` and `data`; a leftover `id`
    /// from a decoded offer is dropped.
    pub async fn create(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, self.api.endpoint_plural())
            .with_params(strip_id(params))
            .with_required(&["name", "data"])
            .with_content_type(ContentType::Json);
        self.api.client().request(&descriptor).await
    }

    /// Updates an offer's data. Requires `id`.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::PUT, self.api.endpoint_plural())
            .with_params(params)
            .with_required(&["id"])
            .with_content_type(ContentType::Json);
        self.api.client().request(&descriptor).await
    }
}
