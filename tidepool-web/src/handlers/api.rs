//! Search relay handlers.
//!
//! Each handler validates the `q` parameter, calls its provider, and maps
//! the result onto an HTTP response. The status depends only on the result
//! tag, never on the route.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Value, json};
use tidepool_search::{RelayError, SearchProvider};

use crate::server::AppState;

/// Query parameters accepted by every search route.
#[derive(Deserialize)]
pub struct SearchParams {
    /// The query text to relay upstream
    pub q: Option<String>,
}

/// Relays `q` to the commercial web-search provider.
pub async fn web_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<Value>) {
    relay("Web search", state.web_search.as_ref(), &params).await
}

/// Relays `q` through the encyclopedia's search-then-summary pipeline.
pub async fn encyclopedia_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<Value>) {
    relay("Encyclopedia", state.encyclopedia.as_ref(), &params).await
}

/// Relays `q` to the instant-answer provider.
pub async fn instant_answer_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<Value>) {
    relay("Instant answer", state.instant_answer.as_ref(), &params).await
}

async fn relay(
    label: &'static str,
    provider: &dyn SearchProvider,
    params: &SearchParams,
) -> (StatusCode, Json<Value>) {
    let query = params.q.as_deref().unwrap_or("");
    if query.is_empty() {
        // Validation failures never reach the provider.
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing query"})),
        );
    }

    relay_response(label, provider.search(query).await)
}

/// Maps a relay result onto its HTTP status and body.
fn relay_response(
    label: &'static str,
    result: Result<Value, RelayError>,
) -> (StatusCode, Json<Value>) {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(RelayError::Misconfigured { .. }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Server misconfigured: missing API key or search engine ID"
            })),
        ),
        Err(err) => {
            tracing::warn!("{label} relay failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("{label} error"),
                    "details": err.detail(),
                })),
            )
        }
    }
}
