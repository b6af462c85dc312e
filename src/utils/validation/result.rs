//! The outcome of a validation rule, as returned by the library and the API.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A validity flag and the human-readable message that goes with it.
///
/// Serialized as `{"isValid": bool, "message": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid(message: &str) -> Self {
        Self {
            is_valid: true,
            message: message.to_owned(),
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            message: error.to_string(),
        }
    }

    /// Collapses the outcome of a typed validation into a result, using
    /// `valid_message` when it succeeded and the error's text otherwise.
    pub fn from_outcome<T>(outcome: Result<T, ValidationError>, valid_message: &str) -> Self {
        match outcome {
            Ok(_) => Self::valid(valid_message),
            Err(error) => Self::invalid(error),
        }
    }
}
