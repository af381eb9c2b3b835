//! Landing page records.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;

/// API wrapper for landing page objects.
#[derive(Debug)]
pub struct LandingPages<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> LandingPages<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "LandingPage", "LandingPages"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> LandingPages<'_, H, S> {
    /// Retrieves a single landing page. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves landing pages matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the landing page object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Retrieves the hosted URL for a landing page. Requires `id`.
    pub async fn get_hosted_url(&self, params: Value) -> Result<String, ApiError> {
        let descriptor = RequestDescriptor::new(Method::GET, "landingPage/getHostedURL")
            .with_params(params)
            .with_required(&["id"]);
        self.api.client().request(&descriptor).await
    }
}
