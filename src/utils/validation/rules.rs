//! The two validation rules exposed by the library and the HTTP API.
//!
//! Both rules are total: every input, including a missing one, yields a
//! `ValidationResult` and nothing here can fail or panic.

use super::{EmailInput, PhoneNumberInput, ValidationError, ValidationResult};
use crate::utils::error_messages::{EMAIL_VALID, PHONE_NUMBER_VALID};

/// Checks that `input` looks like an email address.
///
/// A missing, empty or whitespace-only value is reported as required.
///
/// # Example
/// ```
/// use contact_validator::validate_email;
///
/// let result = validate_email(Some("user@example.com"));
/// assert!(result.is_valid);
/// assert_eq!(result.message, "Email is valid");
///
/// assert_eq!(validate_email(None).message, "Email is required.");
/// ```
pub fn validate_email(input: Option<&str>) -> ValidationResult {
    let outcome = input
        .ok_or(ValidationError::EmailRequired)
        .and_then(EmailInput::try_from);

    ValidationResult::from_outcome(outcome, EMAIL_VALID)
}

/// Checks that `input` is a phone number in the `(123) 456-7890` or
/// `123-456-7890` layout.
///
/// # Example
/// ```
/// use contact_validator::validate_phone_number;
///
/// assert!(validate_phone_number(Some("123-456-7890")).is_valid);
/// assert!(!validate_phone_number(Some("1234567890")).is_valid);
/// ```
pub fn validate_phone_number(input: Option<&str>) -> ValidationResult {
    let outcome = input
        .ok_or(ValidationError::PhoneNumberRequired)
        .and_then(PhoneNumberInput::try_from);

    ValidationResult::from_outcome(outcome, PHONE_NUMBER_VALID)
}
