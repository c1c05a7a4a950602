//! Rule engine shared by every validator kind
//!
//! A [`RuleSet`] is an ordered list of predicate/message pairs. Every rule
//! runs on every call; nothing short-circuits, so a report always carries
//! the complete set of failures in the order the rules were added.

use crate::validators::base::{ValidationErrors, ValidationResult};
use serde_json::Value;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Predicate over a raw input value
///
/// `Ok(false)` means the rule failed. `Err(text)` means the predicate itself
/// could not run; the failure is reported as `"Validation error: {text}"`.
///
/// A panicking predicate is caught and reported the same way, but the
/// process panic hook still runs first and prints to stderr. Return
/// `Err(text)` rather than panicking.
pub type Predicate = Arc<dyn Fn(&Value) -> Result<bool, String> + Send + Sync>;

/// One predicate with the message reported when it fails
#[derive(Clone)]
pub struct Rule {
    predicate: Predicate,
    /// Message reported on failure
    pub message: String,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> Result<bool, String> + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Evaluate the rule, returning the failure message if it did not pass
    pub fn evaluate(&self, value: &Value) -> Option<String> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (self.predicate)(value)));
        match outcome {
            Ok(Ok(true)) => None,
            Ok(Ok(false)) => Some(self.message.clone()),
            Ok(Err(reason)) => Some(format!("Validation error: {}", reason)),
            Err(payload) => Some(format!("Validation error: {}", panic_text(&*payload))),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish()
    }
}

fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "predicate panicked".to_string()
    }
}

/// Ordered rule sequence
///
/// Rules only accumulate. Cloning a set copies the sequence, so a derived
/// validator can append rules without touching the set it was copied from.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule
    pub fn add_rule<F>(&mut self, predicate: F, message: impl Into<String>)
    where
        F: Fn(&Value) -> Result<bool, String> + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(predicate, message));
    }

    /// Append an already built rule
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Replace the message of the last rule, if any
    pub fn set_last_message(&mut self, message: impl Into<String>) {
        if let Some(rule) = self.rules.last_mut() {
            rule.message = message.into();
        }
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule has been added
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Run every rule and collect the failure messages in order
    pub fn failures(&self, value: &Value) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let failure = rule.evaluate(value);
                if let Some(ref message) = failure {
                    tracing::trace!(rule = %rule.message, %message, "rule failed");
                }
                failure
            })
            .collect()
    }

    /// Run every rule and wrap the failures in a result
    pub fn validate(&self, value: &Value) -> ValidationResult {
        ValidationResult::from_errors(ValidationErrors::Messages(self.failures(value)))
    }
}
