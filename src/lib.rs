//! Rust client for the Ontraport marketing automation REST API.
//!
//! The crate is organized around a small HTTP transport with adaptive
//! rate limiting ([`transport`]), a facade exposing one wrapper per API
//! resource ([`client`], [`resources`]), builders for structured request
//! payloads ([`models`], [`criteria`]) and a codec for the automation rule
//! grammar ([`rules`]).

pub mod client;
pub mod criteria;
pub mod models;
pub mod object_type;
pub mod resources;
pub mod rules;
pub mod time;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::Client;
