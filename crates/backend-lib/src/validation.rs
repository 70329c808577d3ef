// ============================
// roombooker-backend-lib/src/validation.rs
// ============================
//! Request payload validation.

use crate::error::AppError;
use regex::Regex;
use roombooker_common::CreateBookingRequest;
use std::sync::LazyLock;
use thiserror::Error;

// Common validation constants
const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321 SMTP limit
const MAX_PASSWORD_LENGTH: usize = 128;
const MAX_TITLE_LENGTH: usize = 200;
const MAX_ROOM_ID_LENGTH: usize = 64;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Possible validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Invalid booking: {0}")]
    InvalidBooking(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate an email address
pub fn validate_email(email: &str) -> ValidationResult<&str> {
    if email.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "email must not be empty".to_string(),
        ));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ValidationError::InvalidEmail(format!(
            "email must be at most {MAX_EMAIL_LENGTH} characters"
        )));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail(
            "email is not a valid address".to_string(),
        ));
    }

    Ok(email)
}

/// Validate a password against the configured minimum length
pub fn validate_password(password: &str, min_length: usize) -> ValidationResult<&str> {
    if password.len() < min_length {
        return Err(ValidationError::InvalidPassword(format!(
            "password must be at least {min_length} characters"
        )));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::InvalidPassword(format!(
            "password must be at most {MAX_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(password)
}

/// Validate the structurally required fields of a booking payload.
///
/// Timestamps are only checked for presence here; whether they parse is
/// the ingestion boundary's concern and never fails the request.
pub fn validate_booking_payload(payload: &CreateBookingRequest) -> ValidationResult<()> {
    if payload.room_id.is_empty() {
        return Err(ValidationError::InvalidBooking(
            "room_id is required".to_string(),
        ));
    }

    if payload.room_id.len() > MAX_ROOM_ID_LENGTH {
        return Err(ValidationError::InvalidBooking(format!(
            "room_id must be at most {MAX_ROOM_ID_LENGTH} characters"
        )));
    }

    if payload.title.is_empty() {
        return Err(ValidationError::InvalidBooking(
            "title is required".to_string(),
        ));
    }

    if payload.title.len() > MAX_TITLE_LENGTH {
        return Err(ValidationError::InvalidBooking(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }

    if payload.start_time.is_empty() || payload.end_time.is_empty() {
        return Err(ValidationError::InvalidBooking(
            "start_time and end_time are required".to_string(),
        ));
    }

    Ok(())
}
