//! # shapecheck
//!
//! Runtime validation for untyped values. Describe the expected shape of a
//! value by composing small validators, then check arbitrary
//! [`serde_json::Value`] input against it.
//!
//! ## Features
//!
//! - String, number, boolean, array and object validators sharing one contract
//! - Constraint builders that accumulate rules in call order
//! - Arrays with typed elements and objects with nested shapes
//! - Non-destructive derivation (`of`, `extend`) for reusable base schemas
//! - Structured, field-keyed error reports alongside joined messages
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let name = schema::string().min(3).max(10);
//! assert!(name.validate(&json!("Sam")).is_valid);
//! assert_eq!(name.parse(&json!("Sam")).unwrap(), "Sam");
//!
//! let err = name.parse(&json!("A")).unwrap_err();
//! assert_eq!(err.to_string(), "String must be at least 3 characters");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;

pub mod validators;
pub mod schema;

// Re-exports for convenience
pub use error::{Error, Result, ValidationError};
pub use limits::Limits;
pub use validators::{
    AnySchema, ArrayValidator, BooleanValidator, Configurable, Kind, NumberValidator,
    ObjectValidator, Schema, Shape, StringValidator, ValidationErrors, ValidationResult,
};

/// Everything needed to build and run validators
pub mod prelude {
    pub use crate::schema;
    pub use crate::validators::{
        AnySchema, Configurable, Schema, Shape, ValidationErrors, ValidationResult,
    };
    pub use crate::{Error, Result};
}

/// Version of the shapecheck library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
