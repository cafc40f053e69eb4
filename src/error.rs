// API error type. Validation failures surface as 400 with a descriptive
// message; anything unexpected is logged and returned as a generic 500,
// with detail included only in debug builds.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": message })),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "unhandled error in request handler");
                let detail = if cfg!(debug_assertions) {
                    err.to_string()
                } else {
                    "internal server error".to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": detail })),
                )
                    .into_response()
            }
        }
    }
}
