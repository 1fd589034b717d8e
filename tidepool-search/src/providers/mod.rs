//! Provider implementations for the search relay.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::RelayError;

pub mod encyclopedia;
pub mod instant_answer;
pub mod mock;
pub mod web_search;

pub use encyclopedia::EncyclopediaProvider;
pub use instant_answer::InstantAnswerProvider;
pub use mock::MockProvider;
pub use web_search::WebSearchProvider;

/// Trait for upstream search providers.
///
/// Implementations issue the outbound call(s) for one relay route and return
/// the upstream JSON body, or a tagged [`RelayError`] for the web layer to
/// map onto an HTTP status.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Relay a single query to the upstream provider.
    ///
    /// # Errors
    /// - `RelayError::Misconfigured` - required credentials absent
    /// - `RelayError::Network` - outbound request failed at the transport level
    /// - `RelayError::UpstreamStatus` - provider returned a non-success status
    /// - `RelayError::Parse` - provider body was not valid JSON
    async fn search(&self, query: &str) -> Result<Value, RelayError>;
}
