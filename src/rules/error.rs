//! Error types for rule construction and decoding.

use thiserror::Error;

/// Error type for the rule grammar codec.
///
/// All variants are fatal and raised before any rule string is produced;
/// nothing in this module touches the network.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The operation name is not in the event/condition/action catalogs.
    #[error("{0} is not a valid rule type")]
    UnknownRule(String),

    /// A contact-only operation was used with another object type.
    #[error("{0} can only be used with the Contacts object")]
    RestrictedRule(String),

    /// The supplied parameter count does not match the schema.
    ///
    /// `Ping_APIURL` is the one variable-arity operation; it requires at
    /// least one parameter rather than an exact count.
    #[error("invalid number of parameters for {rule}: expected {expected}, received {received}")]
    ParameterCount {
        /// The operation being added.
        rule: String,
        /// Parameter count the schema requires.
        expected: usize,
        /// Parameter count actually supplied.
        received: usize,
    },

    /// One or more constrained parameters carried values outside their
    /// vocabulary. All offending parameter names are collected before
    /// failing.
    #[error("invalid inputs for {}", .0.join(", "))]
    InvalidParameterValues(Vec<String>),

    /// A second or later condition was added without an AND/OR joiner.
    #[error("an AND or OR joiner is required between conditions")]
    MissingJoiner,

    /// Serialization requires at least one event and one action.
    #[error("events and actions must be added to create a rule")]
    MissingEventsOrActions,

    /// A stored rule term could not be parsed as `Name(params)`.
    #[error("malformed rule term: {0}")]
    MalformedTerm(String),

    /// A stored rule record was missing a field or carried a wrong type.
    #[error("rule record field missing or invalid: {0}")]
    InvalidRecord(&'static str),
}
