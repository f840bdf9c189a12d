//! Search over stored analyses.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::analysis;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub topic: Option<String>,
}

/// GET /search?topic= — analyses whose topics or keywords contain `topic`.
async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let results = analysis::search(&state, params.topic.as_deref())?;
    Ok(Json(serde_json::json!({
        "count": results.len(),
        "results": results,
    })))
}
