//! Error types for shapecheck
//!
//! `validate` never fails; everything in here is what `parse` and the
//! pattern/limit helpers hand back when they do.

use crate::validators::ValidationErrors;
use std::fmt;
use thiserror::Error;

/// Result type alias using the shapecheck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for shapecheck operations
#[derive(Error, Debug)]
pub enum Error {
    /// A value was rejected by a validator
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A caller-supplied pattern could not be compiled
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// A validated value could not be deserialized into the requested type
    #[error("decoding error: {0}")]
    Decode(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Borrow the validation error, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Rejection raised by `parse`, with the structured report behind it
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Aggregate, human-readable message
    pub message: String,
    /// Location of the rejected value inside the input (`[3]`, `address.city`)
    pub path: Option<String>,
    /// The report that produced the message
    pub errors: Option<ValidationErrors>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            errors: None,
        }
    }

    /// Set the path where validation failed
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach the structured report
    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}
