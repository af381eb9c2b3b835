//! Task records and task lifecycle endpoints.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, ContentType, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;

/// Lifecycle endpoints live under the lowercase singular path.
const TASK_ENDPOINT: &str = "task";

const ASSIGN: &str = "assign";
const CANCEL: &str = "cancel";
const COMPLETE: &str = "complete";
const RESCHEDULE: &str = "reschedule";

/// API wrapper for task objects.
///
/// Tasks are created by assignment rather than the generic create
/// endpoint; the lifecycle calls (`assign`, `cancel`, `complete`,
/// `reschedule`) take JSON bodies.
#[derive(Debug)]
pub struct Tasks<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Tasks<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Task", "Tasks"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Tasks<'_, H, S> {
    /// Retrieves a single task. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves tasks matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching tasks page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Updates a task's data. Requires `id`.
    pub async fn update(&self, params: Value) -> Result<String, ApiError> {
        self.api.update(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the task object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Assigns a task to one or more objects. Requires
    /// `object_type_id` and `ids`.
    pub async fn assign(&self, params: Value) -> Result<String, ApiError> {
        self.lifecycle(ASSIGN, params, &["object_type_id", "ids"]).await
    }

    /// Cancels one or more tasks. Requires `objectID`.
    pub async fn cancel(&self, params: Value) -> Result<String, ApiError> {
        self.lifecycle(CANCEL, params, &["objectID"]).await
    }

    /// Marks one or more tasks as completed. Requires `object_type_id`.
    pub async fn complete(&self, params: Value) -> Result<String, ApiError> {
        self.lifecycle(COMPLETE, params, &["object_type_id"]).await
    }

    /// Reschedules a task. Requires `id`.
    pub async fn reschedule(&self, params: Value) -> Result<String, ApiError> {
        self.lifecycle(RESCHEDULE, params, &["id"]).await
    }

    async fn lifecycle(
        &self,
        operation: &str,
        params: Value,
        required: &'static [&'static str],
    ) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::POST, format!("{TASK_ENDPOINT}/{operation}"))
            .with_params(params)
            .with_required(required)
            .with_content_type(ContentType::Json);
        self.api.client().request(&descriptor).await
    }
}
