//! Reasons an input can be rejected.

use thiserror::Error;

use crate::utils::error_messages::{
    EMAIL_REQUIRED, INVALID_EMAIL, INVALID_PHONE_NUMBER, PHONE_NUMBER_REQUIRED,
};

/// Why a value failed validation.
///
/// The `Display` text of each variant is the exact message sent back to
/// clients, so a `ValidationResult` can be built straight from the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("{}", EMAIL_REQUIRED)]
    EmailRequired,
    #[error("{}", INVALID_EMAIL)]
    InvalidEmail,
    #[error("{}", PHONE_NUMBER_REQUIRED)]
    PhoneNumberRequired,
    #[error("{}", INVALID_PHONE_NUMBER)]
    InvalidPhoneNumber,
}
