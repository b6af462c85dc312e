//! Définitions des structures pour les interactions avec l'API.

use serde::Deserialize;

pub use crate::utils::validation::ValidationResult as ValidationResponse;

/// Corps d'une requête de validation: `{"value": "..."}`.
/// Un champ absent, `null` ou qui n'est pas une chaîne est traité comme une valeur absente.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    value: Option<String>,
}

impl ValidationRequest {
    /// Lit le corps brut de la requête sans jamais échouer.
    /// Un corps illisible donne une requête sans valeur.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("Unreadable validation body, treating value as absent: {}", e);
                Self::default()
            }
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
