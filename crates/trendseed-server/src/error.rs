//! API error type and its HTTP mapping.
//!
//! Two caller-visible failure classes: a missing/blank query parameter is
//! the user's error (400); anything else that escapes the recovery layers
//! is ours (500, with a best-effort detail string). Collaborator failures
//! never surface here — they are recovered into fallback results upstream.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Query parameter is required")]
    MissingQuery,

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Query parameter is required" })),
            )
                .into_response(),
            ApiError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error", "details": details })),
            )
                .into_response(),
        }
    }
}
