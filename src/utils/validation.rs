use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::models::waitlist::WaitlistError;

// local part, '@', and a domain with at least one dot; no whitespace anywhere
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A trimmed address that passed the format check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, WaitlistError> {
        let trimmed = raw.trim();
        if EMAIL_PATTERN.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(WaitlistError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_email(raw: &str) -> bool {
        Email::parse(raw).is_ok()
    }

    #[test]
    fn accepts_plain_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@@example.com"));
        assert!(!is_valid_email("a@example.com b"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let email = Email::parse("  new@example.com \n").unwrap();
        assert_eq!(email.as_str(), "new@example.com");
    }

    #[test]
    fn parse_error_is_invalid_email() {
        assert_eq!(Email::parse("nope"), Err(WaitlistError::InvalidEmail));
    }
}
