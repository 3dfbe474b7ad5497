use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// API-specific error wrapper that converts AppError into HTTP responses.
///
/// The body carries a short category under `error` and the underlying
/// message under `message`. The message is passed through unsanitized,
/// which the site frontend relies on today (see DESIGN.md).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            AppError::ContentService(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Content service error")
            }
            AppError::Mail(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Mail service error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        };

        let message = match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::ContentService(msg)
            | AppError::Mail(msg)
            | AppError::Internal(msg) => msg,
        };

        let body = serde_json::json!({
            "error": error,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
