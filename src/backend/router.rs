//! Configuration des routes pour l'application.

use axum::{routing::post, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers::{validate_email_handler, validate_phone_number_handler};
use crate::consts::{VALIDATE_EMAIL_ROUTE, VALIDATE_PHONE_NUMBER_ROUTE};

/// Initialisation du routeur principal et des middlewares
pub fn get_router() -> Router {
    // Validation d'une adresse email et d'un numéro de téléphone
    let router = Router::new()
        .route(VALIDATE_EMAIL_ROUTE, post(validate_email_handler))
        .route(VALIDATE_PHONE_NUMBER_ROUTE, post(validate_phone_number_handler));

    // CORS pour accepter n'importe quelle origine (en mode debug uniquement)
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_headers(Any)
            .allow_origin(Any);
        router.layer(ServiceBuilder::new().layer(cors))
    } else {
        router
    }
}
