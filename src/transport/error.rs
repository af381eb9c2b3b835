//! Error types for the transport layer.

use thiserror::Error;

/// Error type for low-level HTTP operations.
///
/// Describes what went wrong without dictating recovery strategy. The one
/// condition the transport retries on its own is an HTTP 429 response,
/// which is not an error at this level.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused, TLS
    /// handshake problems and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than a
    /// transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for API calls made through [`ApiTransport`] or the
/// [`Client`] facade.
///
/// The validation variants are raised before any network traffic and
/// indicate programmer errors in the request; [`ApiError::Transport`] is
/// the only variant describing a delivery failure. Non-2xx HTTP statuses
/// other than 429 are not errors: the response body is returned as-is and
/// the status code is separately queryable.
///
/// [`ApiTransport`]: super::ApiTransport
/// [`Client`]: crate::client::Client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request used an HTTP method other than GET, POST, PUT or DELETE.
    #[error("{0} is not a supported HTTP method")]
    UnsupportedMethod(String),

    /// Request parameters were not a JSON object.
    #[error("Invalid input: expected object, received {0}")]
    InvalidParameterType(&'static str),

    /// One or more declared required parameters were absent.
    ///
    /// All missing names are collected before failing. A missing `ids`
    /// key is accepted when `group_ids` is supplied instead, since bulk
    /// endpoints treat them as interchangeable selectors.
    #[error("Invalid input: missing required parameter(s): {}", .0.join(","))]
    MissingRequiredParameters(Vec<String>),

    /// The request target could not be parsed as a URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// A credential value could not be used as an HTTP header.
    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// The underlying HTTP exchange failed.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// JSON encoding of a request body or decoding of a response failed.
    ///
    /// Decoding failures come from multi-step operations (pagination,
    /// custom object lookup) that must interpret intermediate responses.
    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    /// No custom object with the given object type id exists in the account.
    #[error("Invalid object type ID passed to custom object API: {0}")]
    UnknownCustomObject(i64),
}
