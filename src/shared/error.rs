//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Field name -> human-readable reasons.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Application error type
///
/// Message payloads are already rendered in the configured locale.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Validation error: {message}")]
    Validation { message: String, errors: FieldErrors },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            AppError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg, None),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, None),
            AppError::Validation { message, errors } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, Some(errors))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into(), None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into(), None)
            }
        };

        (status, Json(ErrorResponse { message, errors })).into_response()
    }
}
