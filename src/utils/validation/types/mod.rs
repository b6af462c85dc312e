//! Type definitions for the validation system

mod email_input;
mod phone_number_input;

// Re-export commonly used types and functions
pub use email_input::EmailInput;
pub use phone_number_input::PhoneNumberInput;

/// Blank means empty or made only of whitespace.
pub(crate) fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
