//! Structured search criteria for collection endpoints.
//!
//! Unlike the rule grammar, criteria serialize to structured JSON: an
//! array of condition objects interleaved with bare `"AND"`/`"OR"`
//! joiner tokens, mirroring insertion order. The serialized form is
//! passed as the `condition` parameter of collection endpoints.

use serde_json::{Value, json};
use thiserror::Error;

/// Error type for criteria construction.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// The operator string is not in the supported set.
    #[error("{0} is not a supported logical operator for a condition object")]
    UnsupportedOperator(String),

    /// A list value was combined with an operator other than `IN`.
    #[error("Operator must be \"IN\" if condition object value is a list")]
    ArrayOperator,
}

/// Relational operator of a condition term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationalOperator {
    /// `=`
    Equal,
    /// `<>`
    NotEqual,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
    /// `IS`
    Is,
    /// `LIKE`
    Like,
}

impl RelationalOperator {
    /// The operator's wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Is => "IS",
            Self::Like => "LIKE",
        }
    }
}

impl std::fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationalOperator {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "=" => Self::Equal,
            "<>" => Self::NotEqual,
            ">" => Self::GreaterThan,
            "<" => Self::LessThan,
            ">=" => Self::GreaterOrEqual,
            "<=" => Self::LessOrEqual,
            "IN" => Self::In,
            "NOT IN" => Self::NotIn,
            "IS" => Self::Is,
            "LIKE" => Self::Like,
            other => return Err(CriteriaError::UnsupportedOperator(other.to_string())),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Term {
    Condition {
        field: String,
        op: RelationalOperator,
        value: Value,
    },
    Joiner(&'static str),
}

/// An ordered sequence of search conditions joined by AND/OR.
///
/// List values (JSON arrays) are only legal with the `IN` operator.
///
/// # Example
///
/// ```
/// use ontraport::criteria::{Criteria, RelationalOperator};
/// use serde_json::json;
///
/// # fn main() -> Result<(), ontraport::criteria::CriteriaError> {
/// let mut criteria = Criteria::new("email", RelationalOperator::Like, json!("%@example.com"))?;
/// criteria.and_condition("status", RelationalOperator::In, json!([1, 2]))?;
/// let condition = criteria.to_json_string();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    terms: Vec<Term>,
}

impl Criteria {
    /// Creates criteria from an initial condition.
    ///
    /// # Errors
    ///
    /// Fails with [`CriteriaError::ArrayOperator`] when `value` is a
    /// list and `op` is not [`RelationalOperator::In`].
    pub fn new(
        field: impl Into<String>,
        op: RelationalOperator,
        value: Value,
    ) -> Result<Self, CriteriaError> {
        let mut criteria = Self { terms: Vec::new() };
        criteria.push_condition(field.into(), op, value)?;
        Ok(criteria)
    }

    /// Adds a condition that must hold in addition to the existing ones.
    ///
    /// # Errors
    ///
    /// Same validation as [`Criteria::new`].
    pub fn and_condition(
        &mut self,
        field: impl Into<String>,
        op: RelationalOperator,
        value: Value,
    ) -> Result<(), CriteriaError> {
        self.terms.push(Term::Joiner("AND"));
        self.push_condition(field.into(), op, value)
    }

    /// Adds a condition that may hold instead of the existing ones.
    ///
    /// # Errors
    ///
    /// Same validation as [`Criteria::new`].
    pub fn or_condition(
        &mut self,
        field: impl Into<String>,
        op: RelationalOperator,
        value: Value,
    ) -> Result<(), CriteriaError> {
        self.terms.push(Term::Joiner("OR"));
        self.push_condition(field.into(), op, value)
    }

    /// The criteria as a JSON value.
    #[must_use]
    pub fn as_json(&self) -> Value {
        let terms = self
            .terms
            .iter()
            .map(|term| match term {
                Term::Joiner(token) => json!(token),
                Term::Condition { field, op, value } => {
                    let wrapped = if let Value::Array(items) = value {
                        let list: Vec<Value> =
                            items.iter().map(|item| json!({"value": item})).collect();
                        json!({ "list": list })
                    } else {
                        json!({ "value": value })
                    };
                    json!({
                        "field": { "field": field },
                        "op": op.as_str(),
                        "value": wrapped,
                    })
                }
            })
            .collect();
        Value::Array(terms)
    }

    /// The criteria as the JSON string expected by the `condition`
    /// request parameter.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.as_json().to_string()
    }

    fn push_condition(
        &mut self,
        field: String,
        op: RelationalOperator,
        value: Value,
    ) -> Result<(), CriteriaError> {
        if value.is_array() && op != RelationalOperator::In {
            self.pop_dangling_joiner();
            return Err(CriteriaError::ArrayOperator);
        }
        self.terms.push(Term::Condition { field, op, value });
        Ok(())
    }

    /// A rejected condition must not leave its joiner token behind.
    fn pop_dangling_joiner(&mut self) {
        if matches!(self.terms.last(), Some(Term::Joiner(_))) {
            self.terms.pop();
        }
    }
}

#[cfg(test)]
mod criteria_tests;
