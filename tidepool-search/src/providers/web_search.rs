//! Commercial web-search provider.

use async_trait::async_trait;
use serde_json::Value;

use super::SearchProvider;
use crate::config::WebSearchConfig;
use crate::errors::RelayError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Client for the commercial custom-search API.
///
/// Requires both an API key and a search-engine identifier. The credential
/// check happens before any outbound request is built, so a misconfigured
/// process never reaches the network on this route.
#[derive(Debug)]
pub struct WebSearchProvider {
    client: reqwest::Client,
    base_url: String,
    config: WebSearchConfig,
}

impl WebSearchProvider {
    /// Create a provider against the default endpoint.
    pub fn new(config: WebSearchConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL.to_string())
    }

    /// Create a provider against a custom endpoint (used by tests).
    pub fn with_base_url(config: WebSearchConfig, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            config,
        }
    }
}

#[async_trait]
impl SearchProvider for WebSearchProvider {
    async fn search(&self, query: &str) -> Result<Value, RelayError> {
        let (Some(key), Some(engine_id)) = (
            self.config.api_key.as_deref(),
            self.config.engine_id.as_deref(),
        ) else {
            return Err(RelayError::Misconfigured {
                reason: "missing API key or search engine ID".to_string(),
            });
        };

        let url = format!(
            "{}/customsearch/v1?key={key}&cx={engine_id}&q={}",
            self.base_url,
            urlencoding::encode(query)
        );

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| RelayError::Network {
                    reason: format!("web search request failed: {e}"),
                })?;

        if !response.status().is_success() {
            return Err(RelayError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(|e| RelayError::Parse {
            reason: format!("web search JSON parsing failed: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_fail_before_any_request() {
        // Unroutable base URL: a request attempt would surface as Network.
        let provider = WebSearchProvider::with_base_url(
            WebSearchConfig::default(),
            "http://127.0.0.1:9".to_string(),
        );

        let err = provider.search("rust").await.unwrap_err();
        assert!(matches!(err, RelayError::Misconfigured { .. }));
        assert_eq!(err.detail(), "missing API key or search engine ID");
    }

    #[tokio::test]
    async fn partial_credentials_also_fail() {
        let config = WebSearchConfig {
            api_key: Some("key".to_string()),
            engine_id: None,
        };
        let provider =
            WebSearchProvider::with_base_url(config, "http://127.0.0.1:9".to_string());

        let err = provider.search("rust").await.unwrap_err();
        assert!(matches!(err, RelayError::Misconfigured { .. }));
    }
}
