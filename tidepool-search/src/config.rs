//! Credentials for the commercial web-search provider.

/// Credential bundle required by the commercial web-search route.
///
/// Read once from the environment at process start and injected into the
/// provider. Missing values never fail startup; the web-search route reports
/// misconfiguration when invoked.
#[derive(Debug, Clone, Default)]
pub struct WebSearchConfig {
    /// API key for the commercial search endpoint
    pub api_key: Option<String>,
    /// Search-engine identifier scoped to the key
    pub engine_id: Option<String>,
}

impl WebSearchConfig {
    /// Reads `WEB_SEARCH_API_KEY` and `WEB_SEARCH_ENGINE_ID` from the
    /// environment. Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("WEB_SEARCH_API_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            engine_id: std::env::var("WEB_SEARCH_ENGINE_ID")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// Both the key and the engine identifier are present.
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some() && self.engine_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_incomplete() {
        assert!(!WebSearchConfig::default().is_complete());
    }

    #[test]
    fn partial_config_is_incomplete() {
        let config = WebSearchConfig {
            api_key: Some("key".to_string()),
            engine_id: None,
        };
        assert!(!config.is_complete());
    }

    #[test]
    fn full_config_is_complete() {
        let config = WebSearchConfig {
            api_key: Some("key".to_string()),
            engine_id: Some("engine".to_string()),
        };
        assert!(config.is_complete());
    }
}
