//! The API transport: credential injection, encoding, throttling and
//! resilient delivery of single requests.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::time::{Sleeper, TokioSleeper};

use super::encode::form_encode;
use super::{
    API_KEY_HEADER, APP_ID_HEADER, ApiError, ContentType, HttpClient, HttpRequest, HttpResponse,
    RateLimitState, REQUEST_TIMEOUT, ReqwestClient, RequestDescriptor, ThrottlePolicy,
};

/// Default API base: host plus version segment.
pub const DEFAULT_BASE_URL: &str = "https://api.ontraport.com/1";

/// Mutable bookkeeping shared by all calls through one transport.
#[derive(Debug)]
struct TransportState {
    api_key: String,
    app_id: String,
    headers: HeaderMap,
    rate_limit: Option<RateLimitState>,
    last_status: Option<StatusCode>,
}

/// Performs one logical API call with credential injection, body
/// encoding and resilient delivery under the vendor's rate limit.
///
/// Every call validates its descriptor before touching the network,
/// optionally sleeps when the previous response showed the quota nearly
/// exhausted, and transparently retries once after an HTTP 429 using the
/// wait the server asked for. Non-2xx statuses other than 429 are
/// returned to the caller as response bodies, with the status code
/// queryable via [`ApiTransport::last_status`].
///
/// Rate-limit bookkeeping is last-write-wins and only meaningful for
/// serialized usage; sharing one transport across concurrent tasks
/// interleaves the quota snapshots.
///
/// # Type Parameters
///
/// - `H`: the HTTP client implementation
/// - `S`: the sleeper used for throttle and retry delays
///
/// # Example
///
/// ```no_run
/// use http::Method;
/// use ontraport::transport::{ApiTransport, RequestDescriptor};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), ontraport::transport::ApiError> {
/// let transport = ApiTransport::new("api-key", "app-id");
/// let descriptor = RequestDescriptor::new(Method::GET, "Contact")
///     .with_params(json!({"id": 7}))
///     .with_required(&["id"]);
/// let body = transport.send(&descriptor).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiTransport<H = ReqwestClient, S = TokioSleeper> {
    http: H,
    sleeper: S,
    base_url: String,
    timeout: Duration,
    throttle: Option<ThrottlePolicy>,
    state: Mutex<TransportState>,
}

impl ApiTransport<ReqwestClient, TokioSleeper> {
    /// Creates a transport with the default HTTP client, sleeper, base
    /// URL, timeout and throttle policy.
    #[must_use]
    pub fn new(api_key: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            http: ReqwestClient::new(),
            sleeper: TokioSleeper,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            throttle: Some(ThrottlePolicy::default()),
            state: Mutex::new(TransportState {
                api_key: api_key.into(),
                app_id: app_id.into(),
                headers: HeaderMap::new(),
                rate_limit: None,
                last_status: None,
            }),
        }
    }
}

impl<H, S> ApiTransport<H, S> {
    /// Replaces the HTTP client implementation.
    ///
    /// This is how tests inject mock clients.
    #[must_use]
    pub fn with_http_client<H2>(self, http: H2) -> ApiTransport<H2, S> {
        ApiTransport {
            http,
            sleeper: self.sleeper,
            base_url: self.base_url,
            timeout: self.timeout,
            throttle: self.throttle,
            state: self.state,
        }
    }

    /// Replaces the sleeper used for throttle and retry delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> ApiTransport<H, S2> {
        ApiTransport {
            http: self.http,
            sleeper,
            base_url: self.base_url,
            timeout: self.timeout,
            throttle: self.throttle,
            state: self.state,
        }
    }

    /// Overrides the API base URL (host plus version segment).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the pre-emptive throttle policy.
    #[must_use]
    pub fn with_throttle_policy(mut self, policy: ThrottlePolicy) -> Self {
        self.throttle = Some(policy);
        self
    }

    /// Disables pre-emptive throttling entirely.
    ///
    /// The automatic 429 retry is unaffected.
    #[must_use]
    pub fn without_throttle(mut self) -> Self {
        self.throttle = None;
        self
    }

    /// Overwrites the credentials used for subsequent calls.
    ///
    /// In-flight calls keep the credentials they were built with.
    pub fn set_credentials(&self, api_key: impl Into<String>, app_id: impl Into<String>) {
        let mut state = self.lock();
        state.api_key = api_key.into();
        state.app_id = app_id.into();
    }

    /// Upserts a header sent with every subsequent request.
    ///
    /// Per-call descriptor headers win over values set here.
    pub fn set_request_header(&self, name: HeaderName, value: HeaderValue) {
        self.lock().headers.insert(name, value);
    }

    /// Removes a previously set persistent header.
    pub fn remove_request_header(&self, name: &HeaderName) {
        self.lock().headers.remove(name);
    }

    /// The status code of the most recent response, if any.
    #[must_use]
    pub fn last_status(&self) -> Option<StatusCode> {
        self.lock().last_status
    }

    /// The rate-limit quota reported by the most recent response, if any.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimitState> {
        self.lock().rate_limit
    }

    /// The configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn lock(&self) -> MutexGuard<'_, TransportState> {
        // The critical sections below are plain field accesses; a
        // poisoned lock can only mean another thread panicked between
        // them, so the inner state is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H: HttpClient, S: Sleeper> ApiTransport<H, S> {
    /// Performs one API call described by `descriptor` and returns the
    /// raw response body.
    ///
    /// A 429 response triggers exactly one resend after the wait named
    /// by the response's reset header; the retry's status and body
    /// become the result. All other statuses are returned as-is.
    ///
    /// # Errors
    ///
    /// Validation failures ([`ApiError::UnsupportedMethod`],
    /// [`ApiError::InvalidParameterType`],
    /// [`ApiError::MissingRequiredParameters`]) are reported before any
    /// network traffic. Network failures surface as
    /// [`ApiError::Transport`].
    pub async fn send(&self, descriptor: &RequestDescriptor) -> Result<String, ApiError> {
        validate(descriptor)?;

        if let Some(policy) = &self.throttle {
            let quota = self.lock().rate_limit;
            if let Some(delay) = quota.and_then(|quota| policy.delay_for(quota)) {
                tracing::warn!(
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "rate limit quota low, delaying request"
                );
                self.sleeper.sleep(delay).await;
            }
        }

        let request = self.build_request(descriptor)?;
        tracing::debug!(method = %request.method, url = %request.url, "sending API request");

        let mut response = self.http.request(request.clone()).await?;

        if response.status == StatusCode::TOO_MANY_REQUESTS {
            let wait = RateLimitState::reset_seconds(&response.headers);
            tracing::warn!(wait_secs = wait, "rate limited, retrying after reset window");
            self.record(&response);
            self.sleeper.sleep(Duration::from_secs(wait)).await;
            response = self.http.request(request).await?;
        }

        self.record(&response);
        tracing::debug!(status = %response.status, "API response received");
        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    /// Builds the concrete HTTP request for a validated descriptor.
    fn build_request(&self, descriptor: &RequestDescriptor) -> Result<HttpRequest, ApiError> {
        let mut url = self.endpoint_url(descriptor.path())?;
        let mut headers = self.assemble_headers(descriptor)?;

        let mut body = None;
        let params = descriptor
            .params()
            .and_then(Value::as_object)
            .filter(|map| !map.is_empty());
        if let Some(params) = params {
            let method = descriptor.method();
            if *method == Method::GET {
                url.set_query(Some(&form_encode(params)));
            } else if *method == Method::DELETE {
                if descriptor.content_type() == ContentType::Json {
                    headers.insert(CONTENT_TYPE, ContentType::Json.header_value());
                    body = Some(serde_json::to_vec(params)?);
                } else {
                    url.set_query(Some(&form_encode(params)));
                }
            } else {
                headers.insert(CONTENT_TYPE, descriptor.content_type().header_value());
                body = Some(match descriptor.content_type() {
                    ContentType::Json => serde_json::to_vec(params)?,
                    ContentType::Form => form_encode(params).into_bytes(),
                });
            }
        }

        let mut request =
            HttpRequest::new(descriptor.method().clone(), url).with_timeout(self.timeout);
        request.headers = headers;
        request.body = body;
        Ok(request)
    }

    /// Credential base, persistent custom headers, then per-call
    /// overrides, assembled fresh for each request.
    fn assemble_headers(&self, descriptor: &RequestDescriptor) -> Result<HeaderMap, ApiError> {
        let state = self.lock();
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("api-key"),
            HeaderValue::from_str(&state.api_key)
                .map_err(|_| ApiError::InvalidHeader(API_KEY_HEADER))?,
        );
        headers.insert(
            HeaderName::from_static("api-appid"),
            HeaderValue::from_str(&state.app_id)
                .map_err(|_| ApiError::InvalidHeader(APP_ID_HEADER))?,
        );
        for (name, value) in &state.headers {
            headers.insert(name, value.clone());
        }
        for (name, value) in descriptor.headers() {
            headers.insert(name, value.clone());
        }
        Ok(headers)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    fn record(&self, response: &HttpResponse) {
        let mut state = self.lock();
        state.rate_limit = RateLimitState::from_headers(&response.headers);
        state.last_status = Some(response.status);
    }
}

/// Pre-flight validation: verb whitelist, parameter shape and required
/// keys. No network traffic happens before this passes.
fn validate(descriptor: &RequestDescriptor) -> Result<(), ApiError> {
    let method = descriptor.method();
    let supported = [Method::GET, Method::POST, Method::PUT, Method::DELETE];
    if !supported.contains(method) {
        return Err(ApiError::UnsupportedMethod(method.to_string()));
    }

    let params = match descriptor.params() {
        Some(value) => Some(
            value
                .as_object()
                .ok_or_else(|| ApiError::InvalidParameterType(json_type_name(value)))?,
        ),
        None => None,
    };

    let missing: Vec<String> = descriptor
        .required()
        .iter()
        .filter(|&&name| {
            let has = |key: &str| params.is_some_and(|map| map.contains_key(key));
            if has(name) {
                false
            } else if name == "ids" {
                // Bulk endpoints accept group_ids in place of ids.
                !has("group_ids")
            } else {
                true
            }
        })
        .map(ToString::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::MissingRequiredParameters(missing))
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
