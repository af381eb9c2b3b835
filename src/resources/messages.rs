//! Message records.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;

/// Create and update go through the lowercase singular path.
const MESSAGE_ENDPOINT: &str = "message";

/// API wrapper for message objects.
#[derive(Debug)]
pub struct Messages<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Messages<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Message", "Messages"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Messages<'_, H, S> {
    /// Retrieves a single message. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves messages matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching messages page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the message object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Creates a message. Requires `type` (one of the message type
    /// strings, e.g. `e-mail`, `sms`).
    pub async fn create(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, MESSAGE_ENDPOINT)
            .with_params(params)
            .with_required(&["type"]);
        self.api.client().request(&descriptor).await
    }

    /// Updates a message. Requires `id` and `type`.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::PUT, MESSAGE_ENDPOINT)
            .with_params(params)
            .with_required(&["id", "type"]);
        self.api.client().request(&descriptor).await
    }
}
