use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}

/// Liveness only; snapshot availability is the market routes' concern.
async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "zmc-api" }))
}
