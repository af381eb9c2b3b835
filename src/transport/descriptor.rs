//! Request descriptor: everything needed to perform one API call.

use serde_json::Value;

/// Body encoding selector for a request.
///
/// The default wire format is URL-encoded form data; endpoints accepting
/// structured payloads (nested objects, arrays of objects) opt into JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// `application/x-www-form-urlencoded` (the API default).
    #[default]
    Form,
    /// `application/json`.
    Json,
}

impl ContentType {
    /// The corresponding `Content-Type` header value.
    #[must_use]
    pub fn header_value(self) -> http::HeaderValue {
        match self {
            Self::Form => http::HeaderValue::from_static("application/x-www-form-urlencoded"),
            Self::Json => http::HeaderValue::from_static("application/json"),
        }
    }
}

/// Transient description of one API call.
///
/// Built fresh per call by a resource wrapper (or directly by the caller)
/// and consumed by [`ApiTransport::send`]. Holds the target path relative
/// to the API base, the HTTP method, the parameter map, the declared
/// required-parameter names, per-call header overrides and the body
/// encoding selector.
///
/// # Example
///
/// ```
/// use http::Method;
/// use ontraport::transport::{ContentType, RequestDescriptor};
/// use serde_json::json;
///
/// let descriptor = RequestDescriptor::new(Method::POST, "Contacts")
///     .with_params(json!({"firstname": "Ada", "lastname": "Lovelace"}))
///     .with_content_type(ContentType::Form);
/// assert_eq!(descriptor.path(), "Contacts");
/// ```
///
/// [`ApiTransport::send`]: super::ApiTransport::send
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    path: String,
    method: http::Method,
    params: Option<Value>,
    required: &'static [&'static str],
    headers: http::HeaderMap,
    content_type: ContentType,
}

impl RequestDescriptor {
    /// Creates a descriptor for the given method and relative path.
    #[must_use]
    pub fn new(method: http::Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            params: None,
            required: &[],
            headers: http::HeaderMap::new(),
            content_type: ContentType::default(),
        }
    }

    /// Sets the request parameters.
    ///
    /// The value must be a JSON object; anything else fails validation
    /// when the descriptor is sent.
    #[must_use]
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Declares the parameter names that must be present in the map.
    #[must_use]
    pub const fn with_required(mut self, required: &'static [&'static str]) -> Self {
        self.required = required;
        self
    }

    /// Adds a per-call header override.
    ///
    /// Overrides win over the transport's persistent headers for this
    /// call only; they do not leak into subsequent calls.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Selects the body encoding.
    #[must_use]
    pub const fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// The target path, relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The HTTP method.
    #[must_use]
    pub const fn method(&self) -> &http::Method {
        &self.method
    }

    /// The parameter map, if any.
    #[must_use]
    pub const fn params(&self) -> Option<&Value> {
        self.params.as_ref()
    }

    /// The declared required-parameter names.
    #[must_use]
    pub const fn required(&self) -> &'static [&'static str] {
        self.required
    }

    /// The per-call header overrides.
    #[must_use]
    pub const fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    /// The selected body encoding.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }
}
