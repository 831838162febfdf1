use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    let gemini = if state.gemini.is_enabled() {
        "configured"
    } else {
        "disabled"
    };
    Json(json!({ "status": "ok", "gemini": gemini }))
}
