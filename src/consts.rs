//! Définition des constantes globales pour l'application.

pub const HTTP_HOST: &str = "0.0.0.0"; // Adresse d'écoute par défaut.
pub const HTTP_PORT: u16 = 8080; // Port par défaut pour le serveur HTTP.
pub const HTTP_HOST_VAR: &str = "HTTP_HOST"; // Variable d'environnement pour l'adresse.
pub const HTTP_PORT_VAR: &str = "HTTP_PORT"; // Variable d'environnement pour le port.

pub const VALIDATE_EMAIL_ROUTE: &str = "/api/ValidateEmail";
pub const VALIDATE_PHONE_NUMBER_ROUTE: &str = "/api/ValidatePhoneNumber";
