//! Base validator infrastructure
//!
//! This module provides the contract shared by every validator kind and
//! the result types `validate` produces.

use crate::error::{Error, Result, ValidationError};
use crate::validators::rules::RuleSet;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Key used for errors that concern the value itself rather than a field
pub const ROOT_KEY: &str = "root";

/// Kind of a validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// String values
    String,
    /// Numeric values
    Number,
    /// Boolean values
    Boolean,
    /// Arrays, optionally with a typed element
    Array,
    /// Objects with a field shape
    Object,
    /// Any value; the element slot of an untyped array
    Any,
}

impl Kind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Any => "any",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors collected by one `validate` call
///
/// Primitive and array validators report a flat list. Object validators
/// report a mapping from field name to that field's own report, so nested
/// objects produce a tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValidationErrors {
    /// Ordered rule-failure messages
    Messages(Vec<String>),
    /// Per-field reports, in shape order
    Fields(IndexMap<String, ValidationErrors>),
}

impl Default for ValidationErrors {
    fn default() -> Self {
        ValidationErrors::Messages(Vec::new())
    }
}

impl ValidationErrors {
    /// Report for a value that is not an object at all
    pub fn root(message: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(
            ROOT_KEY.to_string(),
            ValidationErrors::Messages(vec![message.into()]),
        );
        ValidationErrors::Fields(fields)
    }

    /// Whether nothing was reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of messages, counting nested fields
    pub fn len(&self) -> usize {
        match self {
            ValidationErrors::Messages(messages) => messages.len(),
            ValidationErrors::Fields(fields) => fields.values().map(|e| e.len()).sum(),
        }
    }

    /// Messages at this level, if this is a flat list
    pub fn messages(&self) -> Option<&[String]> {
        match self {
            ValidationErrors::Messages(messages) => Some(messages),
            ValidationErrors::Fields(_) => None,
        }
    }

    /// Report for one field, if this is a field mapping
    pub fn field(&self, name: &str) -> Option<&ValidationErrors> {
        match self {
            ValidationErrors::Fields(fields) => fields.get(name),
            ValidationErrors::Messages(_) => None,
        }
    }

    /// Flatten into `(path, message)` pairs
    ///
    /// Nested fields are joined with `.`; messages at the top level of a
    /// flat list have an empty path.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        match self {
            ValidationErrors::Messages(messages) => {
                for message in messages {
                    out.push((prefix.to_string(), message.clone()));
                }
            }
            ValidationErrors::Fields(fields) => {
                for (name, errors) in fields {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{}.{}", prefix, name)
                    };
                    errors.flatten_into(&path, out);
                }
            }
        }
    }

    /// Render the report as one message
    ///
    /// Flat lists are joined with `", "`. Field mappings render each field
    /// as `path: msg1, msg2`, joined with `"; "`.
    pub fn render(&self) -> String {
        match self {
            ValidationErrors::Messages(messages) => messages.join(", "),
            ValidationErrors::Fields(_) => {
                let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
                for (path, message) in self.flatten() {
                    grouped.entry(path).or_default().push(message);
                }
                grouped
                    .iter()
                    .map(|(path, messages)| format!("{}: {}", path, messages.join(", ")))
                    .collect::<Vec<_>>()
                    .join("; ")
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Outcome of `validate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether every rule passed
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    /// Everything that failed
    pub errors: ValidationErrors,
}

impl ValidationResult {
    /// A passing result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: ValidationErrors::default(),
        }
    }

    /// A failing result
    pub fn invalid(errors: ValidationErrors) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Build a result from a report; valid iff the report is empty
    pub fn from_errors(errors: ValidationErrors) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Convert into `Ok(())` or the error `parse` would raise
    pub fn into_result(self) -> Result<()> {
        self.into_result_with("")
    }

    /// Like [`into_result`](Self::into_result), with `prefix` placed before
    /// the rendered report
    pub fn into_result_with(self, prefix: &str) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            let message = format!("{}{}", prefix, self.errors.render());
            Err(Error::Validation(
                ValidationError::new(message).with_errors(self.errors),
            ))
        }
    }
}

/// Turn a failed result into the error `parse` raises
pub(crate) fn ensure_valid(kind: Kind, result: ValidationResult, prefix: &str) -> Result<()> {
    if !result.is_valid {
        tracing::debug!(%kind, errors = result.errors.len(), "value rejected");
    }
    result.into_result_with(prefix)
}

/// Contract shared by every validator
///
/// `validate` is total: it reports failures as data and never panics on
/// a bad value. `parse` raises on exactly the inputs `validate` rejects.
pub trait Schema: Send + Sync {
    /// Type `parse` narrows an accepted value to
    type Output;

    /// Kind of this validator
    fn kind(&self) -> Kind;

    /// Check a value and collect every failure
    fn validate(&self, value: &Value) -> ValidationResult;

    /// Check a value and return it re-typed, or raise the aggregate error
    fn parse(&self, value: &Value) -> Result<Self::Output>;
}

/// Object-safe form of [`Schema`], used wherever validators of different
/// kinds are stored side by side
pub trait AnySchema: Send + Sync {
    /// Kind of this validator
    fn schema_kind(&self) -> Kind;

    /// Same as [`Schema::validate`]
    fn check(&self, value: &Value) -> ValidationResult;

    /// Same as [`Schema::parse`], with the output converted back into a value
    fn parse_value(&self, value: &Value) -> Result<Value>;
}

impl<S> AnySchema for S
where
    S: Schema,
    S::Output: Into<Value>,
{
    fn schema_kind(&self) -> Kind {
        Schema::kind(self)
    }

    fn check(&self, value: &Value) -> ValidationResult {
        self.validate(value)
    }

    fn parse_value(&self, value: &Value) -> Result<Value> {
        self.parse(value).map(Into::into)
    }
}

/// Validators configured in place
///
/// Every constraint builder on these validators appends one rule to the
/// validator's own [`RuleSet`] and hands the same validator back. Object
/// validators are not `Configurable`; they are derived instead.
pub trait Configurable: Sized {
    /// Rules installed so far
    fn rules(&self) -> &RuleSet;

    /// Mutable access to the rule sequence
    fn rules_mut(&mut self) -> &mut RuleSet;

    /// Append a caller-supplied rule
    ///
    /// The predicate sees the raw input value. Returning `Err(text)`
    /// reports `"Validation error: {text}"` instead of `message`.
    fn rule<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> std::result::Result<bool, String> + Send + Sync + 'static,
    {
        self.rules_mut().add_rule(predicate, message);
        self
    }

    /// Replace the message of the most recently added rule
    ///
    /// `schema::string().min(3).with_message("Name is too short")` reports
    /// the custom text instead of the default one. Called right after
    /// construction, it overrides the type-guard message.
    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.rules_mut().set_last_message(message);
        self
    }
}

/// Pass-through element validator
///
/// Occupies the element slot of an array with no element type: accepts
/// every value and returns it unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Untyped;

impl Schema for Untyped {
    type Output = Value;

    fn kind(&self) -> Kind {
        Kind::Any
    }

    fn validate(&self, _value: &Value) -> ValidationResult {
        ValidationResult::valid()
    }

    fn parse(&self, value: &Value) -> Result<Value> {
        Ok(value.clone())
    }
}
