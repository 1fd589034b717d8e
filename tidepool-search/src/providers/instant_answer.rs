//! Instant-answer provider.

use async_trait::async_trait;
use serde_json::Value;

use super::SearchProvider;
use crate::errors::RelayError;

const DEFAULT_BASE_URL: &str = "https://api.duckduckgo.com";

/// Client for the instant-answer API.
///
/// Single outbound call with flags suppressing HTML markup and
/// disambiguation pages; the body is relayed verbatim.
#[derive(Debug)]
pub struct InstantAnswerProvider {
    client: reqwest::Client,
    base_url: String,
}

impl InstantAnswerProvider {
    /// Create a provider against the default endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a provider against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for InstantAnswerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for InstantAnswerProvider {
    async fn search(&self, query: &str) -> Result<Value, RelayError> {
        let url = format!(
            "{}/?q={}&format=json&no_html=1&skip_disambig=1",
            self.base_url,
            urlencoding::encode(query)
        );

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| RelayError::Network {
                    reason: format!("instant answer request failed: {e}"),
                })?;

        if !response.status().is_success() {
            return Err(RelayError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(|e| RelayError::Parse {
            reason: format!("instant answer JSON parsing failed: {e}"),
        })
    }
}
