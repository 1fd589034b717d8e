//! Router and server wiring for the search relay.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tidepool_search::providers::{
    EncyclopediaProvider, InstantAnswerProvider, SearchProvider, WebSearchProvider,
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::RelayConfig;
use crate::handlers::{encyclopedia_search, health, instant_answer_search, web_search};

/// Shared state handed to every route handler.
///
/// One provider handle per search route, all read-only after startup, so
/// concurrent requests need no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Commercial web-search provider
    pub web_search: Arc<dyn SearchProvider>,
    /// Encyclopedia two-step provider
    pub encyclopedia: Arc<dyn SearchProvider>,
    /// Instant-answer provider
    pub instant_answer: Arc<dyn SearchProvider>,
}

/// Builds the relay router over the given state and static asset root.
///
/// Paths not matched by an API route are served from `static_root`; misses
/// there fall back to the root's index document so client-side routes
/// resolve. A missing index document yields the service's default 404.
pub fn create_router(state: AppState, static_root: &Path) -> Router {
    let index = static_root.join("index.html");
    let static_site = ServeDir::new(static_root).fallback(ServeFile::new(index));

    Router::new()
        // Relay endpoints, one per upstream provider
        .route("/api/search/provider-a", get(web_search))
        .route("/api/search/encyclopedia", get(encyclopedia_search))
        .route("/api/search/instant-answer", get(instant_answer_search))
        .route("/health", get(health))
        // Everything else is the static frontend bundle
        .fallback_service(static_site)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the relay server until the process exits.
///
/// # Errors
/// Returns an I/O error if the listener cannot bind or the server loop
/// fails; per-request failures never reach this level.
pub async fn run_server(config: RelayConfig) -> std::io::Result<()> {
    let state = AppState {
        web_search: Arc::new(WebSearchProvider::new(config.search.clone())),
        encyclopedia: Arc::new(EncyclopediaProvider::new()),
        instant_answer: Arc::new(InstantAnswerProvider::new()),
    };

    let app = create_router(state, &config.static_root);

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("tidepool relay listening on http://{addr}");
    axum::serve(listener, app).await
}
