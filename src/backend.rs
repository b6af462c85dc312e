//! Module principal pour le backend de l'application.
//! Contient les gestionnaires pour les routes, les modèles de données
//! et le routeur.
pub mod handlers;
pub mod models;
pub mod router;
