// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error types with error codes and context
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing, malformed, or expired session token
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Authenticated but the role check failed
    #[error("Forbidden")]
    Forbidden,

    /// Login failure; deliberately carries no detail so a caller cannot
    /// tell a missing user from a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Overlap policy rejected a create or replace
    #[error("Booking conflicts with an existing booking")]
    BookingConflict,

    /// Secure randomness was unavailable; the operation fails rather than
    /// degrading to a predictable salt
    #[error("Secure randomness unavailable")]
    EntropyUnavailable,

    /// Collaborator (credential/persistence) failure, retryable upstream
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Validation(_) | AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BookingConflict => StatusCode::CONFLICT,
            AppError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::EntropyUnavailable | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "AUTH_001",
            AppError::Forbidden => "AUTH_002",
            AppError::InvalidCredentials => "AUTH_003",
            AppError::Validation(_) => "VAL_001",
            AppError::NotFound(_) => "NF_001",
            AppError::BookingConflict => "BOOK_001",
            AppError::EntropyUnavailable => "RNG_001",
            AppError::Storage(_) => "STORE_001",
            AppError::Internal(_) => "INT_001",
            AppError::Json(_) => "JSON_001",
        }
    }

    /// Get a sanitized message suitable for production use
    pub fn sanitized_message(&self) -> String {
        match self {
            AppError::Unauthenticated => "Authentication required".to_string(),
            AppError::Forbidden => "Admin access required".to_string(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::Validation(msg) => format!("Validation error: {msg}"),
            AppError::NotFound(_) => "Resource not found".to_string(),
            AppError::BookingConflict => {
                "Requested slot conflicts with an existing booking".to_string()
            },
            AppError::EntropyUnavailable => "An internal server error occurred".to_string(),
            AppError::Storage(_) => "Service temporarily unavailable".to_string(),
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            AppError::Json(_) => "Invalid request format".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Use detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        // Create a JSON response with error details
        let body = serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}
