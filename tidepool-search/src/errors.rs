//! Error types for relayed provider calls.

use thiserror::Error;

/// Errors that can occur while relaying a query to an upstream provider.
///
/// Each variant is a tag the web layer maps onto an HTTP status; the mapping
/// depends only on the variant, never on the call site.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Required provider credentials are absent from the process config.
    #[error("provider misconfigured: {reason}")]
    Misconfigured {
        /// Which credential or identifier is missing
        reason: String,
    },

    /// The outbound request failed at the transport level.
    #[error("network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("upstream status {status}")]
    UpstreamStatus {
        /// Status code returned by the provider
        status: u16,
    },

    /// The provider body could not be parsed as JSON.
    #[error("parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },
}

impl RelayError {
    /// Message text of the underlying failure, without the kind prefix.
    ///
    /// Surfaced to API callers as the `details` field of 500 responses.
    pub fn detail(&self) -> String {
        match self {
            Self::Misconfigured { reason } => reason.clone(),
            Self::Network { reason } => reason.clone(),
            Self::UpstreamStatus { status } => format!("upstream status {status}"),
            Self::Parse { reason } => reason.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_strips_kind_prefix() {
        let err = RelayError::Network {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.detail(), "connection refused");
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn upstream_status_detail_names_status() {
        let err = RelayError::UpstreamStatus { status: 503 };
        assert_eq!(err.detail(), "upstream status 503");
    }
}
