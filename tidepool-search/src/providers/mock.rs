//! Mock provider for exercising handlers without outbound calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use super::SearchProvider;
use crate::errors::RelayError;

/// Mock provider returning a canned payload or failure.
///
/// Counts invocations so tests can assert that validation failures never
/// reach the provider.
#[derive(Debug)]
pub struct MockProvider {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

#[derive(Debug)]
enum MockOutcome {
    Payload(Value),
    NetworkFailure(String),
}

impl MockProvider {
    /// Creates a mock that relays the given payload for every query.
    pub fn returning(payload: Value) -> Self {
        Self {
            outcome: MockOutcome::Payload(payload),
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a mock whose every call fails with a network error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::NetworkFailure(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `search` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    async fn search(&self, _query: &str) -> Result<Value, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Payload(payload) => Ok(payload.clone()),
            MockOutcome::NetworkFailure(reason) => Err(RelayError::Network {
                reason: reason.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_calls_and_replays_payload() {
        let payload = serde_json::json!({"Heading": "Rust"});
        let mock = MockProvider::returning(payload.clone());

        assert_eq!(mock.call_count(), 0);
        let result = mock.search("rust").await.unwrap();
        assert_eq!(result, payload);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn failing_mock_yields_network_error() {
        let mock = MockProvider::failing("simulated outage");
        let err = mock.search("rust").await.unwrap_err();
        assert!(matches!(err, RelayError::Network { .. }));
        assert_eq!(err.detail(), "simulated outage");
    }
}
