//! Configuration du serveur, lue depuis l'environnement (et le fichier `.env`).

use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

use crate::consts::{HTTP_HOST, HTTP_HOST_VAR, HTTP_PORT, HTTP_PORT_VAR};

/// Paramètres d'écoute du serveur HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    /// Lit la configuration depuis les variables d'environnement du processus.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construit la configuration à partir d'une fonction de recherche de variables.
    /// Une variable absente prend sa valeur par défaut, une valeur invalide est une erreur.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HTTP_HOST_VAR)
            .unwrap_or_else(|| HTTP_HOST.to_string())
            .trim()
            .parse::<IpAddr>()
            .with_context(|| format!("{HTTP_HOST_VAR} must be an IP address"))?;

        let port = match lookup(HTTP_PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{HTTP_PORT_VAR} must be a port number, got {raw:?}"))?,
            None => HTTP_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
