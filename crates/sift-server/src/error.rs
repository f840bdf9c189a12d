//! Translation of domain errors into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sift_core::{Error, ErrorKind};
use tracing::{error, warn};

/// An error response: `{"detail": "..."}` with a status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Request body failed validation.
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err.kind() {
            ErrorKind::Input => {
                warn!("Rejected request: {}", err);
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            ErrorKind::Service => {
                error!("Upstream failure: {}", err);
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("Service temporarily unavailable: {}", err),
                )
            }
            ErrorKind::Internal => {
                error!("Internal failure: {}", err);
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    format!("Internal error: {}", err),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (Error::Input("empty".into()), StatusCode::BAD_REQUEST, "Invalid input"),
            (
                Error::Service("timeout".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                "Service temporarily unavailable",
            ),
            (Error::Parse("bad json".into()), StatusCode::SERVICE_UNAVAILABLE, "Internal error"),
            (Error::Database("locked".into()), StatusCode::SERVICE_UNAVAILABLE, "Internal error"),
        ];
        for (err, status, prefix) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status(), status);
            assert!(api.detail().starts_with(prefix), "{}", api.detail());
        }
    }
}
