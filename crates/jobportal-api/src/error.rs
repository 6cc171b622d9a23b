//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use jobportal_core::error::{AppError, ErrorKind};

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError {
    inner: AppError,
    details: Option<serde_json::Value>,
}

impl ApiError {
    /// Attach structured details to the error body.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// The wrapped application error.
    pub fn inner(&self) -> &AppError {
        &self.inner
    }

    /// Status code for an error kind.
    pub fn status_for(kind: ErrorKind) -> StatusCode {
        match kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(inner: AppError) -> Self {
        Self {
            inner,
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.inner.kind;
        let status = Self::status_for(kind);

        let (error_code, message) = match kind {
            ErrorKind::Validation => ("VALIDATION_ERROR", self.inner.message),
            ErrorKind::Unauthorized => ("UNAUTHORIZED", self.inner.message),
            ErrorKind::Forbidden => ("FORBIDDEN", self.inner.message),
            ErrorKind::NotFound => ("NOT_FOUND", self.inner.message),
            ErrorKind::Conflict => ("CONFLICT", self.inner.message),
            _ => {
                tracing::error!(
                    kind = %kind,
                    error = %self.inner.message,
                    source = ?std::error::Error::source(&self.inner).map(|s| s.to_string()),
                    "Internal server error"
                );
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
            details: self.details,
        };

        (status, Json(body)).into_response()
    }
}
