//! Check Configuration

use std::path::PathBuf;

pub const DEFAULT_CLIENT_ROOT: &str = "client";
pub const DEFAULT_SERVER_ROOT: &str = "server";
pub const DEFAULT_PORT: u16 = 4242;

/// Where the checks look. Built once per process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    pub client_root: PathBuf,
    pub server_root: PathBuf,
    /// Port the liveness probe connects to on localhost
    pub port: u16,
}

impl CheckConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset, blank, or unparsable values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = non_blank("PORT")
            .and_then(|raw| match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => Some(port),
                _ => {
                    tracing::warn!("Ignoring invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        Self {
            client_root: non_blank("STOREFRONT_CLIENT_ROOT")
                .map_or_else(|| PathBuf::from(DEFAULT_CLIENT_ROOT), PathBuf::from),
            server_root: non_blank("STOREFRONT_SERVER_ROOT")
                .map_or_else(|| PathBuf::from(DEFAULT_SERVER_ROOT), PathBuf::from),
            port,
        }
    }

    /// URL the liveness probe requests
    pub fn probe_url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }
}
