//! Builders for structured request payloads.
//!
//! These model the few endpoints whose parameters are too structured to
//! assemble by hand: offers, their products, and manual transactions.
//! Each model converts to the parameter map its endpoint expects and,
//! where the API returns the same shape, back again.

mod offer;
mod product;
mod transaction;

#[cfg(test)]
mod transaction_tests;

pub use offer::{
    DAY, DEFAULT_INVOICE_TEMPLATE, MONTH, Offer, PriceTerm, QUARTER, SUPPRESS_INVOICE, WEEK, YEAR,
};
pub use product::Product;
pub use transaction::{BillingAddress, CardPayer, ChargeType, Payer, Transaction};

use serde_json::Value;
use thiserror::Error;

/// Error type for request model construction and decoding.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The product has no id yet; only saved products can join an offer.
    #[error("product id not defined in passed product")]
    MissingProductId,

    /// No product with that id exists in the offer.
    #[error("a product with id {0} does not exist in this offer")]
    UnknownProduct(i64),

    /// Offers and transactions must carry at least one product.
    #[error("the offer must have a product")]
    MissingProducts,

    /// A transaction needs an offer loaded before serialization.
    #[error("an offer must be loaded into the transaction")]
    MissingOffer,

    /// A product cannot carry a subscription and a payment plan at once.
    #[error("the product already has a conflicting price plan; delete it first")]
    ConflictingPricePlan,

    /// Subscriptions need a price, either their own or the product's.
    #[error("a price must be indicated for this product to add a subscription")]
    MissingPrice,

    /// Tax ids start at 1.
    #[error("tax id cannot be 0")]
    ZeroTaxId,

    /// Shipping ids start at 1.
    #[error("shipping id cannot be 0")]
    ZeroShippingId,

    /// Charge-now transactions go through a gateway.
    #[error("a gateway id is needed for charge-now transactions")]
    MissingGateway,

    /// A response was missing a field or carried a wrong type.
    #[error("response field missing or invalid: {0}")]
    InvalidResponse(&'static str),
}

/// Conversion between API responses and request parameter maps.
pub trait RequestModel: Sized {
    /// Reconstructs the model from a decoded response object.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::InvalidResponse`] when required fields
    /// are missing or malformed.
    fn from_response(data: &Value) -> Result<Self, ModelError>;

    /// Converts the model to request parameters for its endpoint.
    ///
    /// # Errors
    ///
    /// Fails when the model is not in a sendable state (for example an
    /// offer without products).
    fn to_request_params(&self) -> Result<Value, ModelError>;
}

/// Reads a numeric field the API may return as a number or a decimal
/// string.
pub(crate) fn lenient_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn lenient_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Reads a flag the API may return as a boolean, number or string.
pub(crate) fn lenient_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !matches!(text.as_str(), "" | "0" | "false"),
        _ => false,
    }
}
