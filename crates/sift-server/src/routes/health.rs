//! Health check route.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub const SERVICE_NAME: &str = "LLM Knowledge Extractor";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(health))
}

/// GET / — liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
