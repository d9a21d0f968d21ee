use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}

/// Liveness probe. No backend round-trip: a content API that cannot reach
/// its repository still serves reads from the last known document.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
