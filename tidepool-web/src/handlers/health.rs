//! Liveness endpoint.

use axum::response::Json;
use serde_json::{Value, json};

/// Always reports `{"status":"ok"}`; has no failure path.
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body, json!({"status": "ok"}));
    }
}
