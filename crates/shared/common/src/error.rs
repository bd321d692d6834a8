//! Unified error handling for the directory.
//!
//! Provides a single error type that covers:
//! - Failures talking to the remote users API (network, parse, rejection)
//! - Local lookups and caller-side validation
//! - Axum HTTP responses (for the gateway)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Remote API
    /// Connection failure, invalid URL or deadline expiry
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not JSON or did not have the expected shape
    #[error("Invalid response: {0}")]
    Parse(String),

    /// Remote server explicitly rejected the request
    #[error("{message}")]
    Domain { status: u16, message: String },

    // Local
    #[error("User with ID {0} not found")]
    NotFound(String),

    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::Domain { .. } => "REMOTE_REJECTED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    ///
    /// Upstream 4xx rejections are forwarded as-is; anything else the
    /// remote complained about becomes a 502.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Domain { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::Network(_) | AppError::Parse(_) => StatusCode::BAD_GATEWAY,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(_) => "Please fix the validation errors".to_string(),
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                "A storage error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Whether the repository may absorb this error by using its fallback store.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Parse(_))
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match &self {
            AppError::Validation(messages) => messages.clone(),
            _ => Vec::new(),
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn network(msg: impl Into<String>) -> Self {
        AppError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        AppError::Parse(msg.into())
    }

    pub fn domain(status: u16, message: impl Into<String>) -> Self {
        AppError::Domain {
            status,
            message: message.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(AppError::network("connection refused").is_recoverable());
        assert!(AppError::parse("expected value").is_recoverable());
        assert!(!AppError::domain(409, "Email taken").is_recoverable());
        assert!(!AppError::NotFound("7".into()).is_recoverable());
    }

    #[test]
    fn test_domain_status_mapping() {
        assert_eq!(AppError::domain(409, "Email taken").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::domain(500, "boom").status(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::domain(302, "moved").status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_domain_message_is_shown() {
        let err = AppError::domain(422, "Email already registered");
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            AppError::NotFound("42".into()).to_string(),
            "User with ID 42 not found"
        );
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<u8> = None;
        assert_eq!(missing.ok_or_not_found("x"), Err(AppError::NotFound("x".into())));
    }
}
