//! HTTP error mapping
//!
//! Domain errors carry their own machine-readable codes; this layer only
//! adds the HTTP status. The two OTP outcomes map to 400 on purpose so
//! response codes leak nothing beyond the body's `error_code`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use og_core::errors::CoreError;
use og_shared::types::response::ApiResponse;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CoreError);

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            CoreError::Validation { .. } => StatusCode::BAD_REQUEST,
            CoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            CoreError::OtpInvalid | CoreError::OtpExpired => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(
            self.0.error_code(),
            self.0.to_string(),
        ))
    }
}

/// Collapse validator output into one domain validation error
pub fn validation_error(errors: &validator::ValidationErrors) -> ApiError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    ApiError(CoreError::Validation { message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_outcomes_share_status() {
        assert_eq!(
            ApiError(CoreError::OtpInvalid).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(CoreError::OtpExpired).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_body_carries_code() {
        let response = ApiError(CoreError::OtpInvalid).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
