//! Server Configuration
//!
//! Read once at startup and handed to the router. Handlers never look at
//! the process environment.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4242;
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// Relay configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Stripe secret key. `None` when unset or blank; the relay still starts
    /// and answers checkout requests with a configuration error.
    pub stripe_secret_key: Option<String>,

    /// Base URL of the landing page, used for success/cancel callbacks
    pub client_url: String,

    /// Listen port
    pub port: u16,

    /// Allowed CORS origin
    pub cors_origin: String,
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let stripe_secret_key = non_blank("STRIPE_SECRET_KEY");
        let client_url = non_blank("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.into());

        let port = match non_blank("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(raw)),
            },
            None => DEFAULT_PORT,
        };

        let cors_origin = non_blank("CORS_ORIGIN").unwrap_or_else(|| client_url.clone());

        Ok(Self {
            stripe_secret_key,
            client_url,
            port,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.stripe_secret_key, None);
        assert_eq!(cfg.client_url, DEFAULT_CLIENT_URL);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.cors_origin, DEFAULT_CLIENT_URL);
    }

    #[test]
    fn test_cors_origin_follows_client_url() {
        let cfg = config(&[("CLIENT_URL", "https://shop.example")]).unwrap();
        assert_eq!(cfg.cors_origin, "https://shop.example");

        let cfg = config(&[
            ("CLIENT_URL", "https://shop.example"),
            ("CORS_ORIGIN", "https://cdn.example"),
        ])
        .unwrap();
        assert_eq!(cfg.cors_origin, "https://cdn.example");
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        let cfg = config(&[("STRIPE_SECRET_KEY", "")]).unwrap();
        assert_eq!(cfg.stripe_secret_key, None);

        let cfg = config(&[("STRIPE_SECRET_KEY", "sk_test_1")]).unwrap();
        assert_eq!(cfg.stripe_secret_key.as_deref(), Some("sk_test_1"));
    }

    #[test]
    fn test_invalid_port() {
        assert_eq!(
            config(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort("http".into()))
        );
        assert!(config(&[("PORT", "0")]).is_err());
        assert_eq!(config(&[("PORT", "8080")]).unwrap().port, 8080);
    }
}
