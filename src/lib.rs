//! Validation d'adresses email et de numéros de téléphone.
//!
//! Les règles sont utilisables directement comme bibliothèque
//! ([`validate_email`], [`validate_phone_number`]) ou à travers l'API HTTP
//! construite par [`backend::router::get_router`].

pub mod backend;
pub mod config;
pub mod consts;
pub mod utils;

pub use utils::validation::{
    validate_email, validate_phone_number, EmailInput, PhoneNumberInput, ValidationError,
    ValidationResult,
};
