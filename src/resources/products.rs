//! Product records and product field editing.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, ContentType, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;
use super::base::strip_id;

/// API wrapper for product objects.
#[derive(Debug)]
pub struct Products<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Products<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Product", "Products"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Products<'_, H, S> {
    /// Retrieves a single product. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves products matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching products page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the product object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Creates a product. Requires `name`; a leftover `id` is dropped.
    pub async fn create(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, self.api.endpoint_plural())
            .with_params(strip_id(params))
            .with_required(&["name"])
            .with_content_type(ContentType::Json);
        self.api.client().request(&descriptor).await
    }

    /// Updates a product. Requires `id` and `name`.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::PUT, self.api.endpoint_plural())
            .with_params(params)
            .with_required(&["id", "name"])
            .with_content_type(ContentType::Form);
        self.api.client().request(&descriptor).await
    }

    /// Deletes a single product. Requires `id`.
    pub async fn delete_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_single(params).await
    }

    /// Deletes products matching the given criteria.
    pub async fn delete_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_multiple(params).await
    }

    /// Retrieves the product sections and fields.
    pub async fn retrieve_fields(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_fields(params).await
    }

    /// Creates sections and fields on the product record.
    pub async fn create_fields(&self, params: Value) -> Result<String, ApiError> {
        self.api.create_fields(params).await
    }

    /// Updates sections and fields on the product record.
    pub async fn update_fields(&self, params: Value) -> Result<String, ApiError> {
        self.api.update_fields(params).await
    }

    /// Deletes sections or fields from the product record.
    pub async fn delete_fields(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_fields(params).await
    }
}
