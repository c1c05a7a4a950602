//! Boolean validator

use crate::error::Result;
use crate::validators::base::{ensure_valid, Configurable, Kind, Schema, ValidationResult};
use crate::validators::rules::RuleSet;
use serde_json::Value;

/// Validator for boolean values
#[derive(Debug, Clone)]
pub struct BooleanValidator {
    rules: RuleSet,
}

impl BooleanValidator {
    /// Create a boolean validator with only the type guard installed
    pub fn new() -> Self {
        let mut rules = RuleSet::new();
        rules.add_rule(|v| Ok(v.is_boolean()), "Value must be a boolean");
        Self { rules }
    }

    /// Value is exactly `true`
    pub fn is_true(mut self) -> Self {
        self.rules
            .add_rule(|v| Ok(v.as_bool() == Some(true)), "Must be true");
        self
    }

    /// Value is exactly `false`
    pub fn is_false(mut self) -> Self {
        self.rules
            .add_rule(|v| Ok(v.as_bool() == Some(false)), "Must be false");
        self
    }
}

impl Default for BooleanValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for BooleanValidator {
    fn rules(&self) -> &RuleSet {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }
}

impl Schema for BooleanValidator {
    type Output = bool;

    fn kind(&self) -> Kind {
        Kind::Boolean
    }

    fn validate(&self, value: &Value) -> ValidationResult {
        self.rules.validate(value)
    }

    fn parse(&self, value: &Value) -> Result<bool> {
        ensure_valid(Kind::Boolean, self.validate(value), "")?;
        Ok(value.as_bool().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_guard() {
        let validator = BooleanValidator::new();
        assert!(validator.parse(&json!(true)).unwrap());
        assert!(!validator.parse(&json!(false)).unwrap());

        let err = validator.parse(&json!("true")).unwrap_err();
        assert_eq!(err.to_string(), "Value must be a boolean");
        assert!(validator.parse(&json!(1)).is_err());
    }

    #[test]
    fn test_is_true() {
        let validator = BooleanValidator::new().is_true();
        assert!(validator.validate(&json!(true)).is_valid);
        assert_eq!(validator.parse(&json!(false)).unwrap_err().to_string(), "Must be true");
    }

    #[test]
    fn test_is_false() {
        let validator = BooleanValidator::new().is_false().with_message("Must opt out");
        assert!(validator.validate(&json!(false)).is_valid);
        assert_eq!(validator.parse(&json!(true)).unwrap_err().to_string(), "Must opt out");
    }

    #[test]
    fn test_contradictory_rules_both_report() {
        let validator = BooleanValidator::new().is_true().is_false();
        let err = validator.parse(&json!(true)).unwrap_err();
        assert_eq!(err.to_string(), "Must be false");

        let result = validator.validate(&json!("x"));
        assert_eq!(result.errors.len(), 3);
    }
}
