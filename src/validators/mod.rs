//! Validators
//!
//! This module contains the validator kinds and the rule engine they share.

pub mod base;
pub mod rules;
pub mod patterns;

pub mod strings;
pub mod numbers;
pub mod booleans;
pub mod arrays;
pub mod objects;

// Re-exports
pub use arrays::ArrayValidator;
pub use base::{
    AnySchema, Configurable, Kind, Schema, Untyped, ValidationErrors, ValidationResult, ROOT_KEY,
};
pub use booleans::BooleanValidator;
pub use numbers::NumberValidator;
pub use objects::{ObjectValidator, Shape};
pub use rules::{Rule, RuleSet};
pub use strings::StringValidator;
