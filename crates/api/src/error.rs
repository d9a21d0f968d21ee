use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error type mapping to the JSON bodies the web client expects.
///
/// Content endpoints answer `{error, details?}`; the contact endpoint keeps
/// its own `{message, details?}` shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("missing content payload")]
    MissingContent,

    #[error("missing contact form fields")]
    MissingFields,

    #[error("failed to read content: {0}")]
    ReadFailed(String),

    #[error("failed to commit content: {0}")]
    CommitFailed(String),

    #[error("failed to send contact mail: {0}")]
    MailFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "unauthorized" }),
            ),
            ApiError::MissingContent => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "missing-content" }),
            ),
            ApiError::MissingFields => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Missing fields" }),
            ),
            ApiError::ReadFailed(details) => {
                tracing::error!("failed to read content: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "failed-to-read-content", "details": details }),
                )
            }
            ApiError::CommitFailed(details) => {
                tracing::error!("failed to commit content: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "failed-to-commit-content", "details": details }),
                )
            }
            ApiError::MailFailed(details) => {
                tracing::error!("failed to send contact mail: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Email failed", "details": details }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
