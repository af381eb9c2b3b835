//! Client facade: one typed accessor per API resource.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use http::StatusCode;
use serde_json::Value;

use crate::resources::{
    CampaignBuilderItems, Contacts, CreditCards, CustomObjects, Forms, Groups, LandingPages,
    Messages, Objects, Offers, Products, PurchaseLogs, Purchases, Rules, Tags, Tasks, Transactions,
    Webhooks,
};
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{
    ApiError, ApiTransport, HttpClient, RateLimitState, ReqwestClient, RequestDescriptor,
    ThrottlePolicy,
};

/// Base URL HTTP requests are made to.
pub const REQUEST_URL: &str = "https://api.ontraport.com";

/// API version number this crate targets.
pub const API_VERSION: u32 = 1;

/// Entry point to the API.
///
/// Holds the transport (credentials, rate-limit bookkeeping) and exposes
/// one lightweight accessor per resource. Accessors borrow the client,
/// so one `Client` serves any number of sequential calls.
///
/// # Example
///
/// ```no_run
/// use ontraport::Client;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), ontraport::transport::ApiError> {
/// let client = Client::new("2_000001_abcdef", "api-key");
/// let contact = client
///     .contacts()
///     .retrieve_single(json!({"id": 7}))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<H = ReqwestClient, S = TokioSleeper> {
    transport: ApiTransport<H, S>,
    custom_objects: Mutex<Option<HashMap<i64, Value>>>,
}

impl Client {
    /// Creates a client for the given account.
    ///
    /// `site_id` is the account's numeric app id; `api_key` the key
    /// provisioned for it.
    #[must_use]
    pub fn new(site_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        let transport = ApiTransport::new(api_key, site_id)
            .with_base_url(format!("{REQUEST_URL}/{API_VERSION}"));
        Self {
            transport,
            custom_objects: Mutex::new(None),
        }
    }
}

impl<H, S> Client<H, S> {
    /// Replaces the HTTP client implementation.
    ///
    /// This is how tests inject mock clients.
    #[must_use]
    pub fn with_http_client<H2>(self, http: H2) -> Client<H2, S> {
        Client {
            transport: self.transport.with_http_client(http),
            custom_objects: self.custom_objects,
        }
    }

    /// Replaces the sleeper used for throttle and retry delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Client<H, S2> {
        Client {
            transport: self.transport.with_sleeper(sleeper),
            custom_objects: self.custom_objects,
        }
    }

    /// Replaces the pre-emptive throttle policy.
    #[must_use]
    pub fn with_throttle_policy(mut self, policy: ThrottlePolicy) -> Self {
        self.transport = self.transport.with_throttle_policy(policy);
        self
    }

    /// Disables pre-emptive throttling.
    #[must_use]
    pub fn without_throttle(mut self) -> Self {
        self.transport = self.transport.without_throttle();
        self
    }

    /// Overrides the API base URL, version segment included.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.transport = self.transport.with_base_url(base_url);
        self
    }

    /// Overwrites the credentials used for subsequent calls.
    pub fn set_credentials(&self, api_key: impl Into<String>, site_id: impl Into<String>) {
        self.transport.set_credentials(api_key, site_id);
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &ApiTransport<H, S> {
        &self.transport
    }

    /// The status code of the most recent response, if any.
    #[must_use]
    pub fn last_status_code(&self) -> Option<StatusCode> {
        self.transport.last_status()
    }

    /// The rate-limit quota reported by the most recent response, if any.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimitState> {
        self.transport.rate_limit()
    }

    /// Campaign builder items.
    #[must_use]
    pub const fn campaign_builder_items(&self) -> CampaignBuilderItems<'_, H, S> {
        CampaignBuilderItems::new(self)
    }

    /// Contact records.
    #[must_use]
    pub const fn contacts(&self) -> Contacts<'_, H, S> {
        Contacts::new(self)
    }

    /// Saved credit cards.
    #[must_use]
    pub const fn credit_cards(&self) -> CreditCards<'_, H, S> {
        CreditCards::new(self)
    }

    /// Smart forms.
    #[must_use]
    pub const fn forms(&self) -> Forms<'_, H, S> {
        Forms::new(self)
    }

    /// Contact groups.
    #[must_use]
    pub const fn groups(&self) -> Groups<'_, H, S> {
        Groups::new(self)
    }

    /// Hosted landing pages.
    #[must_use]
    pub const fn landing_pages(&self) -> LandingPages<'_, H, S> {
        LandingPages::new(self)
    }

    /// Email and SMS messages.
    #[must_use]
    pub const fn messages(&self) -> Messages<'_, H, S> {
        Messages::new(self)
    }

    /// Generic object access by object type id.
    #[must_use]
    pub const fn objects(&self) -> Objects<'_, H, S> {
        Objects::new(self)
    }

    /// Offers used in transactions.
    #[must_use]
    pub const fn offers(&self) -> Offers<'_, H, S> {
        Offers::new(self)
    }

    /// Products.
    #[must_use]
    pub const fn products(&self) -> Products<'_, H, S> {
        Products::new(self)
    }

    /// Purchase records.
    #[must_use]
    pub const fn purchases(&self) -> Purchases<'_, H, S> {
        Purchases::new(self)
    }

    /// Purchase history logs.
    #[must_use]
    pub const fn purchase_logs(&self) -> PurchaseLogs<'_, H, S> {
        PurchaseLogs::new(self)
    }

    /// Automation rules.
    #[must_use]
    pub const fn rules(&self) -> Rules<'_, H, S> {
        Rules::new(self)
    }

    /// Tags.
    #[must_use]
    pub const fn tags(&self) -> Tags<'_, H, S> {
        Tags::new(self)
    }

    /// Tasks.
    #[must_use]
    pub const fn tasks(&self) -> Tasks<'_, H, S> {
        Tasks::new(self)
    }

    /// Transactions and orders.
    #[must_use]
    pub const fn transactions(&self) -> Transactions<'_, H, S> {
        Transactions::new(self)
    }

    /// Webhook subscriptions.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_, H, S> {
        Webhooks::new(self)
    }

    fn custom_object_cache(&self) -> MutexGuard<'_, Option<HashMap<i64, Value>>> {
        self.custom_objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H: HttpClient, S: Sleeper> Client<H, S> {
    /// Performs an arbitrary API call.
    ///
    /// Resource wrappers cover the documented endpoints; this is the
    /// escape hatch for anything they do not.
    ///
    /// # Errors
    ///
    /// See [`ApiTransport::send`].
    pub async fn request(&self, descriptor: &RequestDescriptor) -> Result<String, ApiError> {
        self.transport.send(descriptor).await
    }

    /// Accessor for a custom object type.
    ///
    /// The account's custom objects are fetched once and cached for the
    /// lifetime of the client.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiError::UnknownCustomObject`] when the account has
    /// no custom object with this id, or propagates the lookup call's
    /// transport error.
    pub async fn custom(&self, object_type_id: i64) -> Result<CustomObjects<'_, H, S>, ApiError> {
        let cached = self
            .custom_object_cache()
            .as_ref()
            .map(|known| known.contains_key(&object_type_id));

        let exists = match cached {
            Some(exists) => exists,
            None => {
                let fetched = self.objects().retrieve_custom_objects().await?;
                let exists = fetched.contains_key(&object_type_id);
                *self.custom_object_cache() = Some(fetched);
                exists
            }
        };

        if exists {
            Ok(CustomObjects::new(self, object_type_id))
        } else {
            Err(ApiError::UnknownCustomObject(object_type_id))
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
