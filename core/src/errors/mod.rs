//! Domain-specific error types and error handling.
//!
//! Verification outcomes are deliberately coarse: everything short of a
//! matched, in-window code collapses into `OtpInvalid` or `OtpExpired` so
//! callers cannot learn whether a recipient has state in the system.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid token")]
    Unauthorized,

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Never issued, already consumed, swept by TTL, or wrong code;
    /// intentionally indistinguishable
    #[error("Invalid OTP.")]
    OtpInvalid,

    /// The code was real but its validity window lapsed
    #[error("OTP Expired")]
    OtpExpired,
}

impl CoreError {
    /// Machine-readable code carried in API error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            CoreError::Validation { .. } => "VALIDATION_ERROR",
            CoreError::Unauthorized => "UNAUTHORIZED_ERROR",
            CoreError::NotFound { .. } => "NOT_FOUND_ERROR",
            CoreError::Internal { .. } => "INTERNAL_SERVER_ERROR",
            CoreError::OtpInvalid => "ERROR_OTP_INVALID",
            CoreError::OtpExpired => "ERROR_OTP_EXPIRED",
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
