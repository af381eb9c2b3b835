//! HTTP transport layer for the Ontraport API.
//!
//! This module provides types and traits for:
//! - Describing one API call ([`RequestDescriptor`], [`ContentType`])
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Sending requests with credential injection, pre-emptive throttling
//!   and automatic 429 retry ([`ApiTransport`])
//! - Rate-limit bookkeeping ([`RateLimitState`], [`ThrottlePolicy`])

mod client;
mod descriptor;
mod encode;
mod error;
mod http;
mod rate_limit;
mod sender;

#[cfg(test)]
mod sender_tests;

pub use client::ReqwestClient;
pub use descriptor::{ContentType, RequestDescriptor};
pub use error::{ApiError, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use rate_limit::{RateLimitState, ThrottlePolicy};
pub use sender::ApiTransport;

/// Header carrying the account API key on every request.
pub const API_KEY_HEADER: &str = "Api-key";

/// Header carrying the account site id on every request.
pub const APP_ID_HEADER: &str = "Api-Appid";

/// Fixed timeout applied to every outgoing request.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);
