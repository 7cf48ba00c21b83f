use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use catalog::{AggregateError, ProviderError};

/// Unified application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Request validation failed
    #[error("{0}")]
    BadRequest(String),

    /// History store error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A single upstream provider call failed
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The aggregate search could not run at all
    #[error("Aggregation error: {0}")]
    Aggregate(#[from] AggregateError),
}

/// API error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Provider(e) => {
                tracing::error!("Provider error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch course data".to_string(),
                    Some(e.to_string()),
                )
            }
            AppError::Aggregate(e) => {
                tracing::error!("Aggregation error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to aggregate course data".to_string(),
                    Some(e.to_string()),
                )
            }
        };

        let body = ErrorResponse {
            error: error_message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience alias
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}
