//! Unified API error type with Axum `IntoResponse` support.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// API error type that converts to proper HTTP responses.
///
/// Both variants come from the lookup route's file read: the backing
/// file being absent or unreadable, and the file not holding a valid
/// food record. Neither is recoverable, so both surface as a 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("food data unavailable: {0}")]
    DataFile(String),

    #[error("food data malformed: {0}")]
    Parse(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias.
pub type ApiResult<T> = Result<T, ApiError>;
