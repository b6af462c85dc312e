//! Utilitaires partagés entre la bibliothèque et le serveur HTTP.

pub mod error_messages;
pub mod validation;
