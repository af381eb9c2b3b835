//! Automation rule records.
//!
//! Rule payloads are produced by [`RuleBuilder`](crate::rules::RuleBuilder);
//! this wrapper only moves them over the wire.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, ContentType, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;
use super::base::strip_id;

/// API wrapper for rule objects.
#[derive(Debug)]
pub struct Rules<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Rules<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Rule", "Rules"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Rules<'_, H, S> {
    /// Retrieves a single rule. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves rules matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching rules page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves the rule object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Deletes a single rule. Requires `id`.
    pub async fn delete_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_single(params).await
    }

    /// Deletes rules matching the given criteria.
    pub async fn delete_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_multiple(params).await
    }

    /// Creates a rule. Requires `events`, `actions` and
    /// `object_type_id`; a leftover `id` from a decoded rule is
    /// dropped.
    pub async fn create(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, self.api.endpoint_plural())
            .with_params(strip_id(params))
            .with_required(&["events", "actions", "object_type_id"])
            .with_content_type(ContentType::Json);
        self.api.client().request(&descriptor).await
    }

    /// Updates a rule's data. Requires `id`.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        self.api.update(params).await
    }
}
