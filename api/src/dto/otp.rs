//! OTP endpoint DTOs
//!
//! Both requests carry the legacy `phone` alias next to the canonical
//! `recipient` field; the core types collapse them, the DTOs only carry
//! them across the wire.

use serde::Deserialize;
use validator::Validate;

use og_core::domain::entities::otp_record::TargetType;
use og_core::errors::CoreError;
use og_core::services::{CreateOtp, VerifyOtp};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOtpRequest {
    pub recipient: Option<String>,

    pub phone: Option<String>,

    /// "EMAIL" or "PHONE"; defaults to the configured channel
    pub target_type: Option<String>,

    /// Phone message body override; `%code%` is substituted
    #[validate(length(max = 1024, message = "content too long"))]
    pub content: Option<String>,

    /// Requested validity window in seconds
    pub expires_in: Option<u64>,

    /// Requested code length in digits
    pub otp_length: Option<u32>,
}

impl CreateOtpRequest {
    /// Convert into the core request, rejecting unknown target types
    pub fn into_core(self) -> Result<CreateOtp, CoreError> {
        let target_type = match self.target_type.as_deref() {
            Some(raw) => Some(TargetType::parse(raw).ok_or_else(|| CoreError::Validation {
                message: format!("unknown target_type: {}", raw),
            })?),
            None => None,
        };

        Ok(CreateOtp {
            recipient: self.recipient,
            phone: self.phone,
            target_type,
            content: self.content,
            expires_in: self.expires_in,
            otp_length: self.otp_length,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    pub recipient: Option<String>,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
}

impl From<VerifyOtpRequest> for VerifyOtp {
    fn from(request: VerifyOtpRequest) -> Self {
        VerifyOtp {
            recipient: request.recipient,
            phone: request.phone,
            code: request.code,
        }
    }
}
