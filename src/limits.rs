//! Limits for caller-supplied patterns
//!
//! Patterns handed to `StringValidator::pattern` come from the caller and
//! are compiled at configuration time. These limits keep a hostile or
//! accidental pattern from blowing up compile time or memory.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Global limits configuration
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum length of a pattern's source text, in bytes
    pub max_pattern_length: usize,

    /// Maximum size of a compiled pattern, in bytes
    pub regex_size_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pattern_length: 4 * 1024,
            regex_size_limit: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_pattern_length: 256,
            regex_size_limit: 256 * 1024, // 256 KB
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_pattern_length: 64 * 1024,
            regex_size_limit: 100 * 1024 * 1024, // 100 MB
        }
    }

    /// Check if a pattern's source length is within limits
    pub fn check_pattern_length(&self, pattern: &str) -> Result<()> {
        if pattern.len() > self.max_pattern_length {
            Err(Error::LimitExceeded(format!(
                "Pattern length {} exceeds maximum {}",
                pattern.len(),
                self.max_pattern_length
            )))
        } else {
            Ok(())
        }
    }

    /// Compile a pattern within these limits
    pub fn compile_pattern(&self, pattern: &str) -> Result<Regex> {
        self.check_pattern_length(pattern)?;

        RegexBuilder::new(pattern)
            .size_limit(self.regex_size_limit)
            .build()
            .map_err(|e| match e {
                regex::Error::CompiledTooBig(limit) => Error::LimitExceeded(format!(
                    "Compiled pattern '{}' exceeds maximum {} bytes",
                    pattern, limit
                )),
                other => Error::Pattern(format!("Invalid pattern '{}': {}", pattern, other)),
            })
    }
}
