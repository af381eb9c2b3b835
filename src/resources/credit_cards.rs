//! Saved credit card records.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;

/// API wrapper for credit card objects.
#[derive(Debug)]
pub struct CreditCards<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> CreditCards<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "CreditCard", "CreditCards"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> CreditCards<'_, H, S> {
    /// Retrieves a single credit card. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves credit cards matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching credit cards page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the credit card object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Sets a card as the contact's default. Requires `id`.
    pub async fn set_default(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::PUT, "CreditCard/default")
            .with_params(params)
            .with_required(&["id"]);
        self.api.client().request(&descriptor).await
    }
}
