//! Number validator
//!
//! Every JSON number is read as an `f64`, so integers beyond 2^53 lose
//! precision and neighbouring ones compare equal. `even` and `odd` use the plain
//! remainder, so `2.5` fails `even` and passes `odd` (`2.5 % 2 == 0.5`).
//! Chain `int()` first when parity should only accept whole numbers.

use crate::error::Result;
use crate::validators::base::{ensure_valid, Configurable, Kind, Schema, ValidationResult};
use crate::validators::rules::RuleSet;
use serde_json::Value;

/// Validator for numeric values
#[derive(Debug, Clone)]
pub struct NumberValidator {
    rules: RuleSet,
}

impl NumberValidator {
    /// Create a number validator with only the type guard installed
    pub fn new() -> Self {
        let mut rules = RuleSet::new();
        rules.add_rule(|v| Ok(v.is_number()), "Value must be a number");
        Self { rules }
    }

    fn constrain<F>(mut self, predicate: F, message: String) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        self.rules
            .add_rule(move |v| Ok(v.as_f64().is_some_and(|n| predicate(n))), message);
        self
    }

    /// Greater than or equal to `bound`
    pub fn min(self, bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        self.constrain(move |n| n >= bound, format!("Must be at least {}", bound))
    }

    /// Less than or equal to `bound`
    pub fn max(self, bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        self.constrain(move |n| n <= bound, format!("Must be at most {}", bound))
    }

    /// No fractional part
    pub fn int(self) -> Self {
        self.constrain(|n| n.fract() == 0.0, "Must be an integer".to_string())
    }

    /// Exactly equal to `expected`
    pub fn actual(self, expected: impl Into<f64>) -> Self {
        let expected = expected.into();
        self.constrain(
            move |n| n == expected,
            format!("{} does not match expected", expected),
        )
    }

    /// Remainder by two is zero
    pub fn even(self) -> Self {
        self.constrain(|n| n % 2.0 == 0.0, "Must be even".to_string())
    }

    /// Remainder by two is not zero
    pub fn odd(self) -> Self {
        self.constrain(|n| n % 2.0 != 0.0, "Must be odd".to_string())
    }
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for NumberValidator {
    fn rules(&self) -> &RuleSet {
        &self.rules
    }

    fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }
}

impl Schema for NumberValidator {
    type Output = f64;

    fn kind(&self) -> Kind {
        Kind::Number
    }

    fn validate(&self, value: &Value) -> ValidationResult {
        self.rules.validate(value)
    }

    fn parse(&self, value: &Value) -> Result<f64> {
        ensure_valid(Kind::Number, self.validate(value), "")?;
        Ok(value.as_f64().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(result: ValidationResult) -> Vec<String> {
        result.errors.messages().map(<[String]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn test_type_guard() {
        let validator = NumberValidator::new();
        assert_eq!(validator.parse(&json!(3)).unwrap(), 3.0);
        assert_eq!(validator.parse(&json!(-0.5)).unwrap(), -0.5);
        assert_eq!(messages(validator.validate(&json!("3"))), vec!["Value must be a number"]);
        assert!(validator.parse(&json!(null)).is_err());
    }

    #[test]
    fn test_bounds() {
        let validator = NumberValidator::new().min(18.0).max(50.0);

        assert!(validator.validate(&json!(30)).is_valid);
        assert_eq!(messages(validator.validate(&json!(10))), vec!["Must be at least 18"]);
        assert_eq!(messages(validator.validate(&json!(51))), vec!["Must be at most 50"]);
        assert!(validator.validate(&json!(18)).is_valid);
        assert!(validator.validate(&json!(50.0)).is_valid);
    }

    #[test]
    fn test_int() {
        let validator = NumberValidator::new().int();
        assert!(validator.validate(&json!(4)).is_valid);
        assert!(validator.validate(&json!(4.0)).is_valid);
        assert_eq!(messages(validator.validate(&json!(4.2))), vec!["Must be an integer"]);
    }

    #[test]
    fn test_actual() {
        let validator = NumberValidator::new().actual(42.0);
        assert!(validator.validate(&json!(42)).is_valid);
        assert_eq!(
            messages(validator.validate(&json!(41))),
            vec!["42 does not match expected"]
        );
    }

    #[test]
    fn test_parity() {
        let even = NumberValidator::new().even();
        let odd = NumberValidator::new().odd();

        assert!(even.validate(&json!(4)).is_valid);
        assert!(even.validate(&json!(-2)).is_valid);
        assert_eq!(messages(even.validate(&json!(3))), vec!["Must be even"]);
        assert!(odd.validate(&json!(3)).is_valid);
        assert_eq!(messages(odd.validate(&json!(0))), vec!["Must be odd"]);
    }

    #[test]
    fn test_parity_on_fractions_uses_remainder() {
        assert!(!NumberValidator::new().even().validate(&json!(2.5)).is_valid);
        assert!(NumberValidator::new().odd().validate(&json!(2.5)).is_valid);
        assert_eq!(
            messages(NumberValidator::new().int().odd().validate(&json!(2.5))),
            vec!["Must be an integer"]
        );
    }

    #[test]
    fn test_rule_order_is_call_order() {
        let a = NumberValidator::new().even().min(10.0);
        let b = NumberValidator::new().min(10.0).even();

        assert_eq!(messages(a.validate(&json!(3))), vec!["Must be even", "Must be at least 10"]);
        assert_eq!(messages(b.validate(&json!(3))), vec!["Must be at least 10", "Must be even"]);
    }

    #[test]
    fn test_custom_message_on_builders() {
        let validator = NumberValidator::new()
            .with_message("Age is required")
            .min(18)
            .with_message("Adults only");

        assert_eq!(messages(validator.validate(&json!(12))), vec!["Adults only"]);
        assert_eq!(
            messages(validator.validate(&json!("x"))),
            vec!["Age is required", "Adults only"]
        );
    }
}
