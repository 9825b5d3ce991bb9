use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use azstat_client::ApiError;
use azstat_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ApiError`] for validation
/// backend failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `azstat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed call to the validation backend.
    #[error(transparent)]
    Backend(#[from] ApiError),

    /// A page section could not load; carries the message the flow recorded.
    #[error("{0}")]
    Upstream(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Backend errors ---
            AppError::Backend(err) => classify_backend_error(err),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", msg.clone()),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
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

/// Classify a backend error into an HTTP status, error code, and message.
///
/// - A backend 404 maps to 404.
/// - Everything else maps to 502 with the backend's message verbatim.
fn classify_backend_error(err: &ApiError) -> (StatusCode, &'static str, String) {
    if err.is_not_found() {
        return (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string());
    }
    tracing::error!(error = %err, "Backend request failed");
    (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", err.to_string())
}
