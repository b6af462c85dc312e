//! Represents a validated email address.
//!
//! This module provides a type-safe wrapper around email addresses. The accepted
//! shape is deliberately loose: some text, an `@`, some text, a dot and some more
//! text, none of it containing whitespace or another `@`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::is_blank;
use crate::utils::validation::{ValidationError, EMAIL_PATTERN};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex")
});

/// An email address that is guaranteed to match the accepted format.
/// This type can only be constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailInput {
    email: String,
}

impl EmailInput {
    /// Returns a string slice of the validated email address
    pub fn as_str(&self) -> &str {
        &self.email
    }
}

impl TryFrom<&str> for EmailInput {
    type Error = ValidationError;

    /// # Returns
    /// * `Ok(EmailInput)` if the email is valid
    /// * `Err(ValidationError::EmailRequired)` if it is empty or only whitespace
    /// * `Err(ValidationError::InvalidEmail)` otherwise
    fn try_from(email: &str) -> Result<Self, Self::Error> {
        email_validation(email)?;
        Ok(Self {
            email: email.to_owned(),
        })
    }
}

impl TryFrom<String> for EmailInput {
    type Error = ValidationError;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        email_validation(&email)?;
        Ok(Self { email })
    }
}

fn email_validation(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) {
        return Err(ValidationError::EmailRequired);
    }

    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Implements Display to allow printing the email address
impl fmt::Display for EmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}

/// Allows using EmailInput wherever a string reference is needed
impl AsRef<str> for EmailInput {
    fn as_ref(&self) -> &str {
        &self.email
    }
}
