//! Array validator
//!
//! An array validator carries its own rule sequence plus an element slot.
//! [`ArrayValidator::of`] derives a new validator with a typed element;
//! the validator it was called on keeps its rules and element untouched.

use crate::error::{Error, Result, ValidationError};
use crate::validators::base::{
    ensure_valid, Configurable, Kind, Schema, Untyped, ValidationResult,
};
use crate::validators::rules::RuleSet;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Validator for arrays whose elements are checked by `E`
///
/// `E` is [`Untyped`] until [`of`](ArrayValidator::of) attaches a real
/// element validator.
pub struct ArrayValidator<E = Untyped> {
    rules: RuleSet,
    element: Arc<E>,
}

impl ArrayValidator<Untyped> {
    /// Create an array validator with only the type guard installed
    pub fn new() -> Self {
        let mut rules = RuleSet::new();
        rules.add_rule(|v| Ok(v.is_array()), "Value must be an array");
        Self {
            rules,
            element: Arc::new(Untyped),
        }
    }
}

impl Default for ArrayValidator<Untyped> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ArrayValidator<E> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            element: Arc::clone(&self.element),
        }
    }
}

impl<E: Schema> fmt::Debug for ArrayValidator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayValidator")
            .field("rules", &self.rules)
            .field("element", &self.element.kind())
            .finish()
    }
}

impl<E: Schema + 'static> ArrayValidator<E> {
    fn constrain<F>(mut self, predicate: F, message: String) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        self.rules
            .add_rule(move |v| Ok(v.as_array().is_some_and(|items| predicate(items))), message);
        self
    }

    /// At least `length` elements
    pub fn min(self, length: usize) -> Self {
        self.constrain(
            move |items| items.len() >= length,
            format!("Must have at least {} elements", length),
        )
    }

    /// At most `length` elements
    pub fn max(self, length: usize) -> Self {
        self.constrain(
            move |items| items.len() <= length,
            format!("Must have at most {} elements", length),
        )
    }

    /// Exactly `length` elements
    pub fn exact(self, length: usize) -> Self {
        self.constrain(
            move |items| items.len() == length,
            format!("Must have exactly {} elements", length),
        )
    }

    /// At least one element
    pub fn nonempty(self) -> Self {
        self.min(1).with_message("Cannot be empty")
    }

    /// No two elements are equal
    ///
    /// Equality is structural: numbers compare by value (`1` equals `1.0`),
    /// arrays element-wise, objects key by key regardless of order.
    pub fn unique(self) -> Self {
        self.constrain(all_distinct, "All elements must be unique".to_string())
    }

    /// Derive an array validator whose elements must satisfy `element`
    ///
    /// The new validator starts from a copy of this one's rules and adds a
    /// rule requiring every element to pass `element`. `parse` on the result
    /// also re-parses each element through `element`.
    pub fn of<F>(&self, element: F) -> ArrayValidator<F>
    where
        F: Schema + 'static,
    {
        let element = Arc::new(element);
        let mut rules = self.rules.clone();
        let check = Arc::clone(&element);
        rules.add_rule(
            move |v| {
                Ok(v.as_array().is_some_and(|items| {
                    items.iter().all(|item| check.validate(item).is_valid)
                }))
            },
            "Elements do not match required type",
        );

        tracing::debug!(
            element = %element.kind(),
            rules = rules.len(),
            "derived array validator"
        );

        ArrayValidator { rules, element }
    }

    /// The element validator
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Whether a typed element validator is attached
    pub fn has_element(&self) -> bool {
        self.element.kind() != Kind::Any
    }
}

fn all_distinct(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(Canonical::of(item)))
}

/// Hashable stand-in for a value under structural equality
#[derive(PartialEq, Eq, Hash)]
enum Canonical<'a> {
    Null,
    Bool(bool),
    Number(u64),
    String(&'a str),
    Array(Vec<Canonical<'a>>),
    Object(Vec<(&'a str, Canonical<'a>)>),
}

impl<'a> Canonical<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Canonical::Null,
            Value::Bool(b) => Canonical::Bool(*b),
            Value::Number(n) => {
                let n = n.as_f64().unwrap_or_default();
                // -0.0 and 0.0 are the same number
                Canonical::Number(if n == 0.0 { 0.0f64.to_bits() } else { n.to_bits() })
            }
            Value::String(s) => Canonical::String(s),
            Value::Array(items) => Canonical::Array(items.iter().map(Canonical::of).collect()),
            Value::Object(map) => {
                let mut entries: Vec<_> = map
                    .iter()
                    .map(|(key, v)| (key.as_str(), Canonical::of(v)))
                    .collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                Canonical::Object(entries)
            }
        }
    }
}

fn element_error(index: usize, err: Error) -> Error {
    let path = match err.as_validation().and_then(|e| e.path.as_deref()) {
        Some(inner) if inner.starts_with('[') => format!("[{}]{}", index, inner),
        Some(inner) => format!("[{}].{}", index, inner),
        None => format!("[{}]", index),
    };
    let mut wrapped = ValidationError::new(format!("Element at index {}: {}", index, err))
        .with_path(path);
    if let Error::Validation(inner) = err {
        if let Some(errors) = inner.errors {
            wrapped = wrapped.with_errors(errors);
        }
    }
    Error::Validation(wrapped)
}

impl<E> Configurable for ArrayValidator<E> {
    fn rules(&self) -> &RuleSet {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }
}

impl<E: Schema> Schema for ArrayValidator<E> {
    type Output = Vec<E::Output>;

    fn kind(&self) -> Kind {
        Kind::Array
    }

    fn validate(&self, value: &Value) -> ValidationResult {
        self.rules.validate(value)
    }

    fn parse(&self, value: &Value) -> Result<Self::Output> {
        ensure_valid(Kind::Array, self.validate(value), "")?;

        let items = value.as_array().map(Vec::as_slice).unwrap_or_default();
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.element
                    .parse(item)
                    .map_err(|err| element_error(index, err))
            })
            .collect()
    }
}
