//! Tidepool Search - upstream provider clients

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Relays a single query string to one of three external search APIs and
//! hands the upstream JSON body back verbatim. Providers share an error
//! taxonomy whose tags drive the HTTP status mapping in the web layer.

pub mod config;
pub mod errors;
pub mod providers;

// Re-export main types
pub use config::WebSearchConfig;
pub use errors::RelayError;
pub use providers::{
    EncyclopediaProvider, InstantAnswerProvider, MockProvider, SearchProvider, WebSearchProvider,
};

/// Convenience type alias for Results with RelayError.
pub type Result<T> = std::result::Result<T, RelayError>;
