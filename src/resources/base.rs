//! Shared engine behind the per-resource wrappers.

use http::Method;
use serde_json::{Map, Value, json};

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, ContentType, HttpClient, ReqwestClient, RequestDescriptor};

/// Endpoint suffix for meta retrieval.
const META: &str = "meta";
/// Endpoint suffix for save-or-update.
const SAVE_OR_UPDATE: &str = "saveorupdate";
/// Endpoint suffix for collection info.
const GET_INFO: &str = "getInfo";
/// Endpoint suffix for the field editor.
const FIELDS: &str = "fields";

/// Page size used when a paginated retrieval does not specify a range.
const DEFAULT_PAGE_RANGE: u64 = 50;

/// Generic operations over one object type's endpoints.
///
/// Wrappers hold an `ObjectApi` configured with their singular and
/// plural endpoint names and forward to it; anything endpoint-specific
/// (extra paths, JSON bodies, extra required parameters) lives in the
/// wrapper itself.
#[derive(Debug)]
pub(crate) struct ObjectApi<'a, H = ReqwestClient, S = TokioSleeper> {
    client: &'a Client<H, S>,
    endpoint: &'static str,
    endpoint_plural: &'static str,
}

impl<'a, H, S> ObjectApi<'a, H, S> {
    pub(crate) const fn new(
        client: &'a Client<H, S>,
        endpoint: &'static str,
        endpoint_plural: &'static str,
    ) -> Self {
        Self {
            client,
            endpoint,
            endpoint_plural,
        }
    }

    pub(crate) const fn client(&self) -> &'a Client<H, S> {
        self.client
    }

    pub(crate) const fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub(crate) const fn endpoint_plural(&self) -> &'static str {
        self.endpoint_plural
    }

    fn plural_path(&self, suffix: &str) -> String {
        format!("{}/{suffix}", self.endpoint_plural)
    }
}

impl<H: HttpClient, S: Sleeper> ObjectApi<'_, H, S> {
    pub(crate) async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::GET, self.endpoint)
            .with_params(params)
            .with_required(&["id"]);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        let descriptor =
            RequestDescriptor::new(Method::GET, self.endpoint_plural).with_params(params);
        self.client.request(&descriptor).await
    }

    /// Retrieves all matching records page by page.
    ///
    /// Asks the collection info endpoint for the total count, then
    /// advances `start` by `range` until it is reached. Each page's
    /// decoded body becomes one element of the returned JSON array.
    pub(crate) async fn retrieve_multiple_paginated(
        &self,
        params: Value,
    ) -> Result<String, ApiError> {
        let info = self.retrieve_collection_info(params.clone()).await?;
        let info: Value = serde_json::from_str(&info)?;
        let count = lenient_u64(info.pointer("/data/count")).unwrap_or(0);

        let mut map = match params {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let mut start = lenient_u64(map.get("start")).unwrap_or(0);
        let range = lenient_u64(map.get("range")).unwrap_or(DEFAULT_PAGE_RANGE).max(1);

        let mut pages = Vec::new();
        while start < count {
            map.insert("start".to_string(), json!(start));
            map.insert("range".to_string(), json!(range));
            let page = self.retrieve_multiple(Value::Object(map.clone())).await?;
            pages.push(serde_json::from_str::<Value>(&page)?);
            start += range;
        }
        Ok(Value::Array(pages).to_string())
    }

    pub(crate) async fn create(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, self.endpoint_plural)
            .with_params(params)
            .with_content_type(ContentType::Form);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn update(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::PUT, self.endpoint_plural)
            .with_params(params)
            .with_required(&["id"])
            .with_content_type(ContentType::Form);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn delete_single(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::DELETE, self.endpoint)
            .with_params(params)
            .with_required(&["id"]);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn delete_multiple(&self, params: Value) -> Result<String, ApiError> {
        let descriptor =
            RequestDescriptor::new(Method::DELETE, self.endpoint_plural).with_params(params);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn retrieve_meta(&self) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::GET, self.plural_path(META));
        self.client.request(&descriptor).await
    }

    pub(crate) async fn save_or_update(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, self.plural_path(SAVE_OR_UPDATE))
            .with_params(params)
            .with_content_type(ContentType::Form);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        let descriptor =
            RequestDescriptor::new(Method::GET, self.plural_path(GET_INFO)).with_params(params);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn retrieve_fields(&self, params: Value) -> Result<String, ApiError> {
        let descriptor =
            RequestDescriptor::new(Method::GET, self.plural_path(FIELDS)).with_params(params);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn create_fields(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, self.plural_path(FIELDS))
            .with_params(params)
            .with_content_type(ContentType::Json);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn update_fields(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::PUT, self.plural_path(FIELDS))
            .with_params(params)
            .with_content_type(ContentType::Json);
        self.client.request(&descriptor).await
    }

    pub(crate) async fn delete_fields(&self, params: Value) -> Result<String, ApiError> {
        let descriptor =
            RequestDescriptor::new(Method::DELETE, self.plural_path(FIELDS)).with_params(params);
        self.client.request(&descriptor).await
    }
}

/// Reads a count-like value that the API may return as a number or a
/// decimal string.
pub(crate) fn lenient_u64(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Drops the `id` key from creation parameters so stored builders can be
/// replayed against the create endpoint.
pub(crate) fn strip_id(params: Value) -> Value {
    match params {
        Value::Object(mut map) => {
            map.remove("id");
            Value::Object(map)
        }
        other => other,
    }
}
