//! Constants used throughout the validation system

/// One or more non-`@`, non-whitespace characters on each side of the `@`,
/// and a dot followed by at least one more of them after it.
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// `(DDD) DDD-DDDD` with an optional space after the parenthesis, or `DDD-DDD-DDDD`.
/// Digits are ASCII only.
pub const PHONE_NUMBER_PATTERN: &str = r"^(?:\([0-9]{3}\)\s?[0-9]{3}-[0-9]{4}|[0-9]{3}-[0-9]{3}-[0-9]{4})$";
