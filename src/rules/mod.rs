//! Codec for the automation rule grammar.
//!
//! Rules are stored by the API as delimited strings: `Name1(p1,p2);Name2(p1)`
//! for events and actions, and `Name1(p1)|Name2(p2);Name3(p3)` for
//! conditions, where `|` marks an OR and `;` an AND relation to the
//! preceding term. This module provides:
//! - Catalogs of the known trigger/condition/action operations and their
//!   parameter schemas ([`catalog`])
//! - Parameter value vocabularies ([`params`])
//! - A builder assembling validated rules and serializing them for the
//!   Rules endpoints ([`RuleBuilder`])
//! - The inverse decoding of stored rule records ([`RuleBuilder::from_record`])
//!
//! The codec is pure and stateless; builders can be used freely across
//! tasks.

mod builder;
pub mod catalog;
mod error;
mod grammar;
pub mod params;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod grammar_tests;

pub use builder::{RuleBuilder, RuleRecord};
pub use error::RuleError;
pub use grammar::ConditionJoiner;
