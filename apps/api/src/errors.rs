use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Chatbot error: {0}")]
    Chatbot(String),

    #[error("AI matching error: {0}")]
    Matching(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Chatbot(msg) => {
                tracing::error!("Chatbot error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process query".to_string(),
                )
            }
            AppError::Matching(msg) => {
                tracing::error!("AI matching error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process AI matching".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}
