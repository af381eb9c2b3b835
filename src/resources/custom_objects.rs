//! Custom object access with a pinned object type id.

use serde_json::{Map, Value, json};

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient};

use super::Objects;

/// API wrapper for one custom object type.
///
/// Obtained from [`Client::custom`](crate::client::Client::custom),
/// which verifies the id against the account's custom object meta.
/// Every call injects the pinned `objectID` into its parameters and
/// delegates to the generic [`Objects`] endpoints.
#[derive(Debug)]
pub struct CustomObjects<'a, H = ReqwestClient, S = TokioSleeper> {
    objects: Objects<'a, H, S>,
    object_type_id: i64,
}

impl<'a, H, S> CustomObjects<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>, object_type_id: i64) -> Self {
        Self {
            objects: Objects::new(client),
            object_type_id,
        }
    }

    /// The pinned object type id.
    #[must_use]
    pub const fn object_type_id(&self) -> i64 {
        self.object_type_id
    }

    fn with_object_id(&self, params: Value) -> Value {
        let mut map = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => return other,
        };
        map.insert("objectID".to_string(), json!(self.object_type_id));
        Value::Object(map)
    }
}

impl<H: HttpClient, S: Sleeper> CustomObjects<'_, H, S> {
    /// Retrieves a single record. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.objects.retrieve_single(self.with_object_id(params)).await
    }

    /// Retrieves records matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.objects.retrieve_multiple(self.with_object_id(params)).await
    }

    /// Creates a record.
    pub async fn create(&self, params: Value) -> Result<String, ApiError> {
        self.objects.create(self.with_object_id(params)).await
    }

    /// Deletes a single record. Requires `id`.
    pub async fn delete_single(&self, params: Value) -> Result<String, ApiError> {
        self.objects.delete_single(self.with_object_id(params)).await
    }

    /// Deletes records matching the given criteria.
    pub async fn delete_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.objects.delete_multiple(self.with_object_id(params)).await
    }

    /// Updates a record's data.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        self.objects.update(self.with_object_id(params)).await
    }

    /// Retrieves this custom object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.objects
            .retrieve_meta(Some(self.with_object_id(Value::Null)))
            .await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.objects
            .retrieve_collection_info(self.with_object_id(params))
            .await
    }
}
