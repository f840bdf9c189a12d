//! Text analysis route.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use sift_store::AnalysisRecord;

use crate::analysis;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze_text))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// POST /analyze — extract metadata and keywords, store, and return the record.
async fn analyze_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AnalysisRecord>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    if req.text.is_empty() {
        return Err(ApiError::unprocessable(
            "text: must contain at least 1 character",
        ));
    }

    let record = analysis::analyze(&state, &req.text).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
