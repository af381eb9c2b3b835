//! Generic object access by object type id.
//!
//! Every typed wrapper has a generic twin here: pass `objectID` to pick
//! the object type. This is also the only way to reach object types the
//! crate has no dedicated wrapper for, custom objects included.

use std::collections::HashMap;

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::object_type;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, ContentType, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;

const TAG: &str = "tag";
const SEQUENCE: &str = "sequence";
const PAUSE: &str = "pause";
const UNPAUSE: &str = "unpause";

/// API wrapper for the generic objects endpoints.
#[derive(Debug)]
pub struct Objects<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Objects<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "object", "objects"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Objects<'_, H, S> {
    /// Retrieves a single object. Requires `id` and `objectID`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::GET, self.api.endpoint())
            .with_params(params)
            .with_required(&["id", "objectID"]);
        self.api.client().request(&descriptor).await
    }

    /// Retrieves objects matching the given criteria. Requires
    /// `objectID`.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::GET, self.api.endpoint_plural())
            .with_params(params)
            .with_required(&["objectID"]);
        self.api.client().request(&descriptor).await
    }

    /// Creates an object. Requires `objectID`.
    pub async fn create(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, self.api.endpoint_plural())
            .with_params(params)
            .with_required(&["objectID"])
            .with_content_type(ContentType::Json);
        self.api.client().request(&descriptor).await
    }

    /// Deletes a single object. Requires `id` and `objectID`.
    pub async fn delete_single(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::DELETE, self.api.endpoint())
            .with_params(params)
            .with_required(&["id", "objectID"]);
        self.api.client().request(&descriptor).await
    }

    /// Deletes objects matching the given criteria. Requires
    /// `objectID`.
    pub async fn delete_multiple(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::DELETE, self.api.endpoint_plural())
            .with_params(params)
            .with_required(&["objectID"]);
        self.api.client().request(&descriptor).await
    }

    /// Updates an object's data. Requires `objectID`.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::PUT, self.api.endpoint_plural())
            .with_params(params)
            .with_required(&["objectID"])
            .with_content_type(ContentType::Json);
        self.api.client().request(&descriptor).await
    }

    /// Retrieves meta for one or all object types. `objectID` is
    /// optional; without it every object type is returned.
    pub async fn retrieve_meta(&self, params: Option<Value>) -> Result<String, ApiError> {
        let mut descriptor = RequestDescriptor::new(Method::GET, "objects/meta");
        if let Some(params) = params {
            descriptor = descriptor.with_params(params);
        }
        self.api.client().request(&descriptor).await
    }

    /// Creates an object or merges with an existing one on its unique
    /// field. Requires `objectID`.
    pub async fn save_or_update(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, "objects/saveorupdate")
            .with_params(params)
            .with_required(&["objectID"])
            .with_content_type(ContentType::Form);
        self.api.client().request(&descriptor).await
    }

    /// Retrieves collection info for the given criteria. Requires
    /// `objectID`.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::GET, "objects/getInfo")
            .with_params(params)
            .with_required(&["objectID"]);
        self.api.client().request(&descriptor).await
    }

    /// Returns the account's custom objects keyed by object type id.
    ///
    /// Custom object types occupy the id range starting at
    /// [`object_type::CUSTOM_OBJECT_BASE`]; everything below is a
    /// built-in type and filtered out.
    pub async fn retrieve_custom_objects(&self) -> Result<HashMap<i64, Value>, ApiError> {
        let meta = self.retrieve_meta(None).await?;
        let meta: Value = serde_json::from_str(&meta)?;

        let mut custom = HashMap::new();
        if let Some(data) = meta.get("data").and_then(Value::as_object) {
            for (id, description) in data {
                if let Ok(id) = id.parse::<i64>() {
                    if id >= object_type::CUSTOM_OBJECT_BASE {
                        custom.insert(id, description.clone());
                    }
                }
            }
        }
        Ok(custom)
    }

    /// Pauses rules, sequences and sequence subscribers for one or more
    /// objects. Requires `ids` (or `group_ids`).
    pub async fn pause(&self, params: Value) -> Result<String, ApiError> {
        self.bulk_call(Method::POST, PAUSE, params, &["ids"]).await
    }

    /// Unpauses rules, sequences and sequence subscribers for one or
    /// more objects. Requires `ids` (or `group_ids`).
    pub async fn unpause(&self, params: Value) -> Result<String, ApiError> {
        self.bulk_call(Method::POST, UNPAUSE, params, &["ids"]).await
    }

    /// Adds one or more objects to one or more sequences. Requires
    /// `add_list` and `ids` (or `group_ids`).
    pub async fn add_to_sequence(&self, params: Value) -> Result<String, ApiError> {
        self.bulk_call(Method::PUT, SEQUENCE, params, &["add_list", "ids"])
            .await
    }

    /// Removes one or more objects from one or more sequences. Requires
    /// `remove_list` and `ids` (or `group_ids`).
    pub async fn remove_from_sequence(&self, params: Value) -> Result<String, ApiError> {
        self.bulk_call(Method::DELETE, SEQUENCE, params, &["remove_list", "ids"])
            .await
    }

    /// Adds one or more tags to one or more objects. Requires
    /// `add_list` and `ids` (or `group_ids`).
    pub async fn add_tag(&self, params: Value) -> Result<String, ApiError> {
        self.bulk_call(Method::PUT, TAG, params, &["add_list", "ids"]).await
    }

    /// Removes one or more tags from one or more objects. Requires
    /// `remove_list` and `ids` (or `group_ids`).
    pub async fn remove_tag(&self, params: Value) -> Result<String, ApiError> {
        self.bulk_call(Method::DELETE, TAG, params, &["remove_list", "ids"])
            .await
    }

    async fn bulk_call(
        &self,
        method: Method,
        operation: &str,
        params: Value,
        required: &'static [&'static str],
    ) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(method, format!("objects/{operation}"))
            .with_params(params)
            .with_required(required)
            .with_content_type(ContentType::Form);
        self.api.client().request(&descriptor).await
    }
}
