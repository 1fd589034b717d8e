//! Process-wide configuration for the relay server.
//!
//! Loaded once from the environment at startup and passed explicitly into
//! the server; never mutated afterwards.

use std::path::PathBuf;

use tidepool_search::WebSearchConfig;

/// Listen port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 5000;

/// Static asset root used when `STATIC_DIR` is unset.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Immutable relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// TCP port the listener binds
    pub port: u16,
    /// Directory the static frontend bundle is served from
    pub static_root: PathBuf,
    /// Commercial web-search credentials
    pub search: WebSearchConfig,
}

impl RelayConfig {
    /// Loads configuration from the environment, applying defaults.
    ///
    /// Missing credentials never fail startup; only the commercial-search
    /// route reports them when invoked.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(std::env::var("PORT").ok()),
            static_root: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            search: WebSearchConfig::from_env(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_root: PathBuf::from(DEFAULT_STATIC_DIR),
            search: WebSearchConfig::default(),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }

    #[test]
    fn port_defaults_when_unparseable() {
        assert_eq!(parse_port(Some("not-a-port".to_string())), DEFAULT_PORT);
    }

    #[test]
    fn port_parses_valid_value() {
        assert_eq!(parse_port(Some("8080".to_string())), 8080);
    }

    #[test]
    fn default_config_points_at_public_dir() {
        let config = RelayConfig::default();
        assert_eq!(config.static_root, PathBuf::from("public"));
        assert!(!config.search.is_complete());
    }
}
