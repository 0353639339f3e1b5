use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::notion_client::NotionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Content backend error: {0}")]
    Notion(#[from] NotionError),

    #[error("User lookup failed: {0}")]
    UserLookup(NotionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            AppError::Notion(e) => {
                tracing::error!("Content backend error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "CONTENT_BACKEND_ERROR",
                    "Failed to load resumes".to_string(),
                )
            }
            AppError::UserLookup(e) => {
                tracing::error!("User lookup failed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "CONTENT_BACKEND_ERROR",
                    "Failed to load user profile".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
