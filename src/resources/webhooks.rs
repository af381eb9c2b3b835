//! Webhook subscriptions.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;

/// API wrapper for webhook objects.
#[derive(Debug)]
pub struct Webhooks<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Webhooks<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Webhook", "Webhooks"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Webhooks<'_, H, S> {
    /// Retrieves a single webhook. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves webhooks matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching webhooks page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Subscribes to a webhook event. Requires `event` and `url`.
    pub async fn subscribe(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, "Webhook/subscribe")
            .with_params(params)
            .with_required(&["event", "url"]);
        self.api.client().request(&descriptor).await
    }

    /// Unsubscribes from a webhook. Requires `id`.
    pub async fn unsubscribe(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::DELETE, "Webhook/unsubscribe")
            .with_params(params)
            .with_required(&["id"]);
        self.api.client().request(&descriptor).await
    }
}
