//! String validator
//!
//! Length bounds count Unicode scalar values, not bytes.

use crate::error::Result;
use crate::limits::Limits;
use crate::validators::base::{ensure_valid, Configurable, Kind, Schema, ValidationResult};
use crate::validators::patterns;
use crate::validators::rules::RuleSet;
use regex::Regex;
use serde_json::Value;

/// Validator for string values
#[derive(Debug, Clone)]
pub struct StringValidator {
    rules: RuleSet,
}

impl StringValidator {
    /// Create a string validator with only the type guard installed
    pub fn new() -> Self {
        let mut rules = RuleSet::new();
        rules.add_rule(|v| Ok(v.is_string()), "Value must be a string");
        Self { rules }
    }

    fn constrain<F>(mut self, predicate: F, message: String) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules
            .add_rule(move |v| Ok(v.as_str().is_some_and(|s| predicate(s))), message);
        self
    }

    /// At least `length` characters
    pub fn min(self, length: usize) -> Self {
        self.constrain(
            move |s| s.chars().count() >= length,
            format!("String must be at least {} characters", length),
        )
    }

    /// At most `length` characters
    pub fn max(self, length: usize) -> Self {
        self.constrain(
            move |s| s.chars().count() <= length,
            format!("String must be at most {} characters", length),
        )
    }

    /// Exactly `length` characters
    pub fn exact(self, length: usize) -> Self {
        self.constrain(
            move |s| s.chars().count() == length,
            format!("Must be exactly {} characters", length),
        )
    }

    /// At least one character
    pub fn nonempty(self) -> Self {
        self.min(1).with_message("Cannot be empty")
    }

    /// Match a precompiled pattern
    pub fn regex(self, pattern: Regex) -> Self {
        let message = format!("String must match pattern: /{}/", pattern.as_str());
        self.constrain(move |s| pattern.is_match(s), message)
    }

    /// Compile `pattern` under the default [`Limits`] and match it
    pub fn pattern(self, pattern: &str) -> Result<Self> {
        self.pattern_with_limits(pattern, &Limits::default())
    }

    /// Compile `pattern` under the given limits and match it
    pub fn pattern_with_limits(self, pattern: &str, limits: &Limits) -> Result<Self> {
        let compiled = limits.compile_pattern(pattern)?;
        Ok(self.regex(compiled))
    }

    fn format(self, pattern: &Regex, message: &str) -> Self {
        self.regex(pattern.clone()).with_message(message)
    }

    /// Looks like an email address
    pub fn email(self) -> Self {
        self.format(&patterns::EMAIL, "Invalid email format")
    }

    /// Looks like a URL, scheme optional
    pub fn url(self) -> Self {
        self.format(&patterns::URL, "Invalid URL format")
    }

    /// Starts with an ISO-8601 date and the `T` separator
    pub fn date(self) -> Self {
        self.format(&patterns::DATE, "Invalid date format")
    }

    /// Hyphenated UUID
    pub fn uuid(self) -> Self {
        self.format(&patterns::UUID, "Invalid UUID format")
    }

    /// Phone number
    pub fn phone(self) -> Self {
        self.format(&patterns::PHONE, "Invalid phone number format")
    }

    /// ASCII letters and digits only
    pub fn alphanumeric(self) -> Self {
        self.format(&patterns::ALPHANUMERIC, "Must contain only letters and numbers")
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for StringValidator {
    fn rules(&self) -> &RuleSet {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }
}

impl Schema for StringValidator {
    type Output = String;

    fn kind(&self) -> Kind {
        Kind::String
    }

    fn validate(&self, value: &Value) -> ValidationResult {
        self.rules.validate(value)
    }

    fn parse(&self, value: &Value) -> Result<String> {
        ensure_valid(Kind::String, self.validate(value), "")?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }
}
