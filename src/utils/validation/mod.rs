//! Root module for the validation system.
//! Exposes the public API for input validation.

mod constants;
mod error;
mod result;
mod rules;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use error::ValidationError;
pub use result::ValidationResult;
pub use rules::{validate_email, validate_phone_number};
pub use types::{EmailInput, PhoneNumberInput};
