//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidEmail(email) => write!(
                f,
                "Invalid email address format: {} (expected letters@letters.letters)",
                email
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number format: {} (expected + followed by digits)",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
