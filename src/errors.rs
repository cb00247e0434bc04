use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<String>),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                let body = serde_json::json!({
                    "isSuccess": false,
                    "message": "Validation failed",
                    "errors": errors,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::NotFound(message) => {
                let body = serde_json::json!({
                    "isSuccess": false,
                    "message": message,
                });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            AppError::Storage(err) => {
                // Diagnostic detail goes to the log, never to the caller.
                tracing::error!("storage error: {err:#}");
                let body = serde_json::json!({
                    "isSuccess": false,
                    "message": "An unexpected error occurred",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
