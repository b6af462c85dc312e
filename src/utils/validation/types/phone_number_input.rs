//! Represents a validated North American style phone number.
//!
//! Two layouts are accepted, `(123) 456-7890` (the space is optional) and
//! `123-456-7890`. Anything else, including bare digits or a leading country
//! code, is rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::is_blank;
use crate::utils::validation::{ValidationError, PHONE_NUMBER_PATTERN};

static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PHONE_NUMBER_PATTERN).expect("Failed to compile phone number regex")
});

/// Wrapper type for a phone number that has been validated
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumberInput(String);

impl PhoneNumberInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for PhoneNumberInput {
    type Error = ValidationError;

    fn try_from(phone_number: &str) -> Result<Self, Self::Error> {
        phone_number_validation(phone_number)?;
        Ok(Self(phone_number.to_owned()))
    }
}

impl TryFrom<String> for PhoneNumberInput {
    type Error = ValidationError;

    fn try_from(phone_number: String) -> Result<Self, Self::Error> {
        phone_number_validation(&phone_number)?;
        Ok(Self(phone_number))
    }
}

fn phone_number_validation(phone_number: &str) -> Result<(), ValidationError> {
    if is_blank(phone_number) {
        return Err(ValidationError::PhoneNumberRequired);
    }

    if PHONE_NUMBER_REGEX.is_match(phone_number) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneNumber)
    }
}

impl fmt::Display for PhoneNumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneNumberInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        let valid_cases = vec![
            "(123) 456-7890",
            "(123)456-7890",
            "123-456-7890",
            "(000) 000-0000",
            "(123)\t456-7890", // Any single whitespace is tolerated after the parenthesis
        ];

        for number in valid_cases {
            assert!(
                PhoneNumberInput::try_from(number).is_ok(),
                "Valid phone number {} was rejected !",
                number
            );
        }
    }

    #[test]
    fn test_invalid_phone_numbers() {
        let invalid_cases = vec![
            "1234567890",        // No separators
            "123 456 7890",      // Spaces instead of dashes
            "(123)  456-7890",   // Two spaces
            "(123) 456 7890",    // Missing dash
            "123-4567-890",      // Wrong grouping
            "(12) 345-67890",    // Wrong grouping
            "+1 123-456-7890",   // Country code
            "123-456-78901",     // Too long
            "123-456-789",       // Too short
            "abc-def-ghij",      // Non-numeric
            "(123-456-7890",     // Unbalanced parenthesis
            "123-456-7890 ",     // Trailing whitespace
            "١٢٣-٤٥٦-٧٨٩٠",      // Non-ASCII digits
        ];

        for number in invalid_cases {
            assert_eq!(
                PhoneNumberInput::try_from(number),
                Err(ValidationError::InvalidPhoneNumber),
                "Invalid phone number {} was accepted !",
                number
            );
        }
    }

    #[test]
    fn test_blank_phone_numbers_are_required() {
        for number in ["", "  ", "\n"] {
            assert_eq!(
                PhoneNumberInput::try_from(number),
                Err(ValidationError::PhoneNumberRequired)
            );
        }
    }

    #[test]
    fn test_phone_number_display() {
        let number = PhoneNumberInput::try_from("123-456-7890").unwrap();
        assert_eq!(number.to_string(), "123-456-7890");
    }

    #[test]
    fn test_phone_number_as_ref() {
        let number = PhoneNumberInput::try_from(String::from("(123) 456-7890")).unwrap();
        assert_eq!(number.as_ref(), "(123) 456-7890");
        assert_eq!(number.as_str(), "(123) 456-7890");
    }
}
