use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Per-source fetch failures never reach this type; they are absorbed by the
/// aggregator. Only failures of the request as a whole end up here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "Not found",
                format!("No route for {path}"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch jobs",
                    format!("{e:#}"),
                )
            }
        };

        let body = Json(json!({
            "error": error,
            "details": details
        }));

        (status, body).into_response()
    }
}
