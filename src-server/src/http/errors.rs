//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DomainError;

/// Error returned by handlers, rendered as `{"detail": ...}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            // The message is the whole detail, e.g. "Item not found"
            DomainError::NotFound(detail) => Self {
                status: StatusCode::NOT_FOUND,
                detail,
            },
            DomainError::InvalidInput(_) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: err.to_string(),
            },
            DomainError::Internal(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, detail = %self.detail, "request failed");
        }
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
