//! Object validator
//!
//! An object validator owns a [`Shape`]: field names mapped to validators
//! of any kind. Validation delegates each field to its validator and
//! collects the failing fields into a field-keyed report.

use crate::error::{Error, Result};
use crate::validators::base::{ensure_valid, AnySchema, Kind, Schema, ValidationErrors, ValidationResult};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Stand-in for a field missing from the input
static MISSING: Value = Value::Null;

/// Field names mapped to their validators, in insertion order
#[derive(Clone, Default)]
pub struct Shape {
    fields: IndexMap<String, Arc<dyn AnySchema>>,
}

impl Shape {
    /// Create an empty shape
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any validator already under `name`
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: AnySchema + 'static,
    {
        self.insert(name, Arc::new(schema));
        self
    }

    /// Insert a shared validator under `name`
    pub fn insert(&mut self, name: impl Into<String>, schema: Arc<dyn AnySchema>) {
        self.fields.insert(name.into(), schema);
    }

    /// Validator for one field
    pub fn get(&self, name: &str) -> Option<&dyn AnySchema> {
        self.fields.get(name).map(|schema| schema.as_ref())
    }

    /// Field names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Fields and validators in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn AnySchema)> {
        self.fields
            .iter()
            .map(|(name, schema)| (name.as_str(), schema.as_ref()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the shape has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Union of two shapes; `other` wins on conflicting names
    fn merged(&self, other: &Shape) -> Shape {
        let mut fields = self.fields.clone();
        for (name, schema) in &other.fields {
            fields.insert(name.clone(), Arc::clone(schema));
        }
        Shape { fields }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(name, schema)| (name, schema.schema_kind())))
            .finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Arc<dyn AnySchema>)> for Shape {
    fn from_iter<I: IntoIterator<Item = (K, Arc<dyn AnySchema>)>>(iter: I) -> Self {
        let mut shape = Shape::new();
        for (name, schema) in iter {
            shape.insert(name, schema);
        }
        shape
    }
}

/// Validator for objects with a fixed field shape
///
/// `field` grows this validator's own shape and is meant for chain
/// construction. `extend` and `extend_with` leave this validator alone and
/// return a new one, so a base object can serve as a template for several
/// specialised ones.
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    shape: Shape,
}

impl ObjectValidator {
    /// Create an object validator with no fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object validator with the given shape
    pub fn create(shape: Shape) -> Self {
        ObjectValidator::new().extend(shape)
    }

    /// Add a field to this validator's shape
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: AnySchema + 'static,
    {
        self.shape.insert(name, Arc::new(schema));
        self
    }

    /// Close a chain of `field` calls
    pub fn build(self) -> Self {
        self
    }

    /// Derive a validator with this shape plus `shape`
    pub fn extend(&self, shape: Shape) -> ObjectValidator {
        let merged = self.shape.merged(&shape);
        tracing::debug!(fields = merged.len(), "derived object validator");
        ObjectValidator { shape: merged }
    }

    /// Derive a validator with this shape plus `other`'s
    pub fn extend_with(&self, other: &ObjectValidator) -> ObjectValidator {
        self.extend(other.shape.clone())
    }

    /// The field shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Field names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.shape.keys()
    }

    /// Validator for one field
    pub fn get(&self, name: &str) -> Option<&dyn AnySchema> {
        self.shape.get(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// Whether the shape has no fields
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Validate, then deserialize the input into `T`
    pub fn parse_into<T: DeserializeOwned>(&self, value: &Value) -> Result<T> {
        let accepted = self.parse(value)?;
        serde_json::from_value(accepted).map_err(|e| Error::Decode(e.to_string()))
    }
}

impl Schema for ObjectValidator {
    type Output = Value;

    fn kind(&self) -> Kind {
        Kind::Object
    }

    fn validate(&self, value: &Value) -> ValidationResult {
        let Some(object) = value.as_object() else {
            return ValidationResult::invalid(ValidationErrors::root("Value must be an object"));
        };

        let mut errors = IndexMap::new();
        for (name, schema) in self.shape.iter() {
            let field_value = object.get(name).unwrap_or(&MISSING);
            let result = schema.check(field_value);
            if !result.is_valid {
                errors.insert(name.to_string(), result.errors);
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors: ValidationErrors::Fields(errors),
        }
    }

    /// Returns the input unchanged once every field validates; field
    /// validators are not asked to re-parse their values
    fn parse(&self, value: &Value) -> Result<Value> {
        ensure_valid(Kind::Object, self.validate(value), "Validation failed: ")?;
        Ok(value.clone())
    }
}
