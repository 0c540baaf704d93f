use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shelf_core::SourceError;

/// Application-level error type for HTTP handlers.
///
/// Only source-of-record failures ever reach this type: cache failures
/// are absorbed inside the fetch path and never cross the handler
/// boundary. Implements [`IntoResponse`] to produce consistent JSON
/// error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The source of record could not be queried.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Source(err) => {
                tracing::error!(error = %err, "Source query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SOURCE_ERROR",
                    err.to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
