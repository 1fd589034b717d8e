//! Encyclopedia provider: search lookup, then a summary of the top title.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::SearchProvider;
use crate::errors::RelayError;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Envelope for the search-step response.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

/// Client for the encyclopedia's search and summary endpoints.
///
/// Relaying is a two-step pipeline: a title search for the query, then a
/// summary fetch for the top-ranked title. The summary call never issues
/// unless the search step yields at least one hit; a miss relays as an empty
/// JSON object with success status rather than an error.
#[derive(Debug)]
pub struct EncyclopediaProvider {
    client: reqwest::Client,
    search_base: String,
    summary_base: String,
}

impl EncyclopediaProvider {
    /// Create a provider against the default endpoints.
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_BASE_URL.to_string(), DEFAULT_BASE_URL.to_string())
    }

    /// Create a provider against custom endpoints (used by tests).
    pub fn with_base_urls(search_base: String, summary_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            search_base,
            summary_base,
        }
    }

    async fn top_title(&self, query: &str) -> Result<Option<String>, RelayError> {
        let url = format!(
            "{}/w/api.php?action=query&list=search&srsearch={}&format=json&utf8=1&srlimit=1&origin=*",
            self.search_base,
            urlencoding::encode(query)
        );

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| RelayError::Network {
                    reason: format!("encyclopedia search failed: {e}"),
                })?;

        if !response.status().is_success() {
            return Err(RelayError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        let envelope: SearchEnvelope =
            response.json().await.map_err(|e| RelayError::Parse {
                reason: format!("encyclopedia search JSON parsing failed: {e}"),
            })?;

        let hits = envelope.query.map(|q| q.search).unwrap_or_default();
        Ok(hits.into_iter().next().map(|hit| hit.title))
    }

    async fn summary(&self, title: &str) -> Result<Value, RelayError> {
        let url = format!(
            "{}/api/rest_v1/page/summary/{}",
            self.summary_base,
            urlencoding::encode(title)
        );

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| RelayError::Network {
                    reason: format!("encyclopedia summary failed: {e}"),
                })?;

        if !response.status().is_success() {
            return Err(RelayError::UpstreamStatus {
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(|e| RelayError::Parse {
            reason: format!("encyclopedia summary JSON parsing failed: {e}"),
        })
    }
}

impl Default for EncyclopediaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for EncyclopediaProvider {
    async fn search(&self, query: &str) -> Result<Value, RelayError> {
        let Some(title) = self.top_title(query).await? else {
            // No match relays as an empty object, not an error.
            return Ok(Value::Object(serde_json::Map::new()));
        };

        tracing::debug!(%title, "fetching encyclopedia summary for top search hit");
        self.summary(&title).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_envelope_reads_top_hit() {
        let body = r#"{"query":{"search":[{"title":"Rust","pageid":1},{"title":"Oxide"}]}}"#;
        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        let hits = envelope.query.map(|q| q.search).unwrap_or_default();
        assert_eq!(hits.first().map(|h| h.title.as_str()), Some("Rust"));
    }

    #[test]
    fn search_envelope_tolerates_missing_query_field() {
        let envelope: SearchEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.query.is_none());
    }
}
