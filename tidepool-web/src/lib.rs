//! Tidepool Web - search relay API server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Exposes the relay's JSON endpoints (one per upstream provider plus a
//! health check) and serves the bundled static frontend for every other
//! path, falling back to the index document for client-side routes.

pub mod config;
pub mod handlers;
pub mod server;

// Re-export main types
pub use config::RelayConfig;
pub use server::{AppState, create_router, run_server};
