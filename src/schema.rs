//! Entry points for building validators
//!
//! ```rust
//! use shapecheck::prelude::*;
//! use serde_json::json;
//!
//! let user = schema::object::create(
//!     Shape::new()
//!         .field("name", schema::string().min(3))
//!         .field("tags", schema::array().of(schema::string()).unique()),
//! );
//!
//! assert!(user.validate(&json!({"name": "Sam", "tags": ["a", "b"]})).is_valid);
//! assert!(user.parse(&json!({"name": "Xi", "tags": []})).is_err());
//! ```

use crate::validators::{
    ArrayValidator, BooleanValidator, NumberValidator, Schema, StringValidator,
};

/// A fresh string validator
pub fn string() -> StringValidator {
    StringValidator::new()
}

/// A fresh number validator
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

/// A fresh boolean validator
pub fn boolean() -> BooleanValidator {
    BooleanValidator::new()
}

/// A fresh array validator with no element type
pub fn array() -> ArrayValidator {
    ArrayValidator::new()
}

/// A fresh array validator whose elements must satisfy `element`
pub fn array_of<E: Schema + 'static>(element: E) -> ArrayValidator<E> {
    ArrayValidator::new().of(element)
}

/// Object validators
pub mod object {
    use crate::validators::{ObjectValidator, Shape};

    /// An object validator with the complete shape given up front
    pub fn create(shape: Shape) -> ObjectValidator {
        ObjectValidator::create(shape)
    }

    /// An empty object validator for `field(..)` chains closed by `build()`
    pub fn chain() -> ObjectValidator {
        ObjectValidator::new()
    }
}
