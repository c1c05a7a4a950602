//! Built-in string formats
//!
//! Each named format on `StringValidator` installs one of these patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// Something, an `@`, something, a dot, something; no whitespace
pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Optional http(s) scheme, a dotted host and an optional path
pub static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$").unwrap()
});

/// ISO-8601 date followed by the `T` time separator
pub static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T").unwrap());

/// Hyphenated hex UUID, any case
pub static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

/// Ten to twelve digits with optional `+`, parentheses and separators
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").unwrap()
});

/// ASCII letters and digits only
pub static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(EMAIL.is_match("sam@example.com"));
        assert!(!EMAIL.is_match("sam@example"));
        assert!(!EMAIL.is_match("sam smith@example.com"));
    }

    #[test]
    fn test_url() {
        assert!(URL.is_match("https://example.com"));
        assert!(URL.is_match("example.com/path/to"));
        assert!(!URL.is_match("not a url"));
    }

    #[test]
    fn test_date() {
        assert!(DATE.is_match("2024-01-31T10:00:00Z"));
        assert!(!DATE.is_match("2024-01-31"));
    }

    #[test]
    fn test_uuid() {
        assert!(UUID.is_match("123e4567-e89b-12d3-a456-426614174000"));
        assert!(UUID.is_match("123E4567-E89B-12D3-A456-426614174000"));
        assert!(!UUID.is_match("123e4567e89b12d3a456426614174000"));
    }

    #[test]
    fn test_phone() {
        assert!(PHONE.is_match("+1234567890"));
        assert!(PHONE.is_match("(123) 456-7890"));
        assert!(!PHONE.is_match("12-34"));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(ALPHANUMERIC.is_match("abc123"));
        assert!(!ALPHANUMERIC.is_match("abc 123"));
        assert!(!ALPHANUMERIC.is_match(""));
    }
}
