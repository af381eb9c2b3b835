//! Contact records.

use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient};

use super::ObjectApi;

/// API wrapper for contact objects.
///
/// Contacts carry the account's standard fields (`firstname`,
/// `lastname`, `email`, …) plus any custom contact fields; parameter
/// maps are passed through to the API unchanged.
#[derive(Debug)]
pub struct Contacts<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Contacts<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Contact", "Contacts"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Contacts<'_, H, S> {
    /// Retrieves a single contact. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves contacts matching the given criteria.
    ///
    /// All keys are optional: `ids`, `start`, `range`, `sort`,
    /// `sortDir`, `condition`, `search`, `searchNotes`, `group_ids`,
    /// `performAll`, `externs`, `listFields`. Without `ids` all
    /// contacts are selected.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching contacts page by page; see
    /// [`retrieve_multiple`](Self::retrieve_multiple) for the accepted
    /// keys. Each page becomes one element of the returned JSON array.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Creates a contact.
    pub async fn create(&self, params: Value) -> Result<String, ApiError> {
        self.api.create(params).await
    }

    /// Deletes a single contact. Requires `id`.
    pub async fn delete_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_single(params).await
    }

    /// Deletes contacts matching the given criteria. Without `ids` all
    /// are deleted.
    pub async fn delete_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.delete_multiple(params).await
    }

    /// Updates a contact's data. Requires `id`.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        self.api.update(params).await
    }

    /// Retrieves the contact object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Creates a contact or merges with an existing one on its unique
    /// field.
    pub async fn save_or_update(&self, params: Value) -> Result<String, ApiError> {
        self.api.save_or_update(params).await
    }

    /// Retrieves collection info (such as the contact count) for the
    /// given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }
}
