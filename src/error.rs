//! HTTP-facing error type.
//!
//! Every failure is rendered with the same envelope as successful responses:
//!
//! ```json
//! { "success": false, "response": "URL Not Found" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::envelope::ApiResponse;
use crate::domain::repositories::StorageError;

/// Message returned for unknown codes, on both redirect and info lookups.
pub const NOT_FOUND_MESSAGE: &str = "URL Not Found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    MethodNotAllowed { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn method_not_allowed(method: impl std::fmt::Display) -> Self {
        Self::MethodNotAllowed {
            message: format!("method {method} not allowed"),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(message) => AppError::bad_request(message),
            StorageError::NotFound { .. } => AppError::not_found(NOT_FOUND_MESSAGE),
            other => AppError::internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self.message());
        }

        let body = ApiResponse::failure(self.message().to_string());
        (status, Json(body)).into_response()
    }
}
