//! Gestionnaires des routes de validation.
//!
//! Une validation qui échoue reste une réponse réussie (200) qui décrit
//! le résultat; seul le corps de la réponse change.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::Json;

use crate::backend::models::{ValidationRequest, ValidationResponse};
use crate::consts::{VALIDATE_EMAIL_ROUTE, VALIDATE_PHONE_NUMBER_ROUTE};
use crate::utils::validation::{validate_email, validate_phone_number};

/// Valide une adresse email reçue dans `{"value": ...}`.
pub async fn validate_email_handler(
    body: Result<Bytes, BytesRejection>,
) -> Json<ValidationResponse> {
    let request = read_request(body);
    let result = validate_email(request.value());

    log::debug!("{} -> isValid={}", VALIDATE_EMAIL_ROUTE, result.is_valid);
    Json(result)
}

/// Valide un numéro de téléphone reçu dans `{"value": ...}`.
pub async fn validate_phone_number_handler(
    body: Result<Bytes, BytesRejection>,
) -> Json<ValidationResponse> {
    let request = read_request(body);
    let result = validate_phone_number(request.value());

    log::debug!("{} -> isValid={}", VALIDATE_PHONE_NUMBER_ROUTE, result.is_valid);
    Json(result)
}

// Un corps impossible à lire est traité comme un corps sans valeur.
fn read_request(body: Result<Bytes, BytesRejection>) -> ValidationRequest {
    match body {
        Ok(bytes) => ValidationRequest::from_body(&bytes),
        Err(e) => {
            log::debug!("Failed to read request body: {}", e);
            ValidationRequest::default()
        }
    }
}
