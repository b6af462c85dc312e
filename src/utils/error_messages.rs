//! Every message a validation rule can report.
//!
//! These strings are part of the HTTP contract and are matched verbatim by
//! clients, so they must not be reworded.

pub const EMAIL_REQUIRED: &str = "Email is required.";

pub const INVALID_EMAIL: &str = "Invalid email format";

pub const EMAIL_VALID: &str = "Email is valid";

pub const PHONE_NUMBER_REQUIRED: &str = "Phone number is required.";

pub const INVALID_PHONE_NUMBER: &str = "Invalid phone number format";

pub const PHONE_NUMBER_VALID: &str = "Phone number is valid";
