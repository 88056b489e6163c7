//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]+@[A-Za-z]+\.[A-Za-z]+$").expect("Failed to compile email regex")
});

/// Check whether `email` is a well-formed email address.
///
/// The accepted grammar is deliberately narrow: ASCII letters, `@`, ASCII
/// letters, `.`, ASCII letters. Digits, hyphens, subdomains and
/// plus-addressing are all rejected.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use contact_book::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.to_string(), "user@example.com");
/// assert!(EmailAddress::new("user1@example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("a@b.co").unwrap();
        assert_eq!(email.as_str(), "a@b.co");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("A@B.C"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn test_email_rejects_outside_narrow_grammar() {
        assert!(!is_valid_email("user1@example.com"));
        assert!(!is_valid_email("user@example2.com"));
        assert!(!is_valid_email("first-last@example.com"));
        assert!(!is_valid_email("user@mail.example.com"));
        assert!(!is_valid_email("user.name@example.com"));
        assert!(!is_valid_email("user+tag@example.com"));
        assert!(!is_valid_email("üser@example.com"));
        assert!(!is_valid_email(" user@example.com"));
    }

    #[test]
    fn test_email_serialization() {
        let email = EmailAddress::new("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }
}
