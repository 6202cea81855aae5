//! Request types for the OTP engine

use crate::domain::entities::otp_record::TargetType;

/// Issuance request, already past transport-layer validation
#[derive(Debug, Clone, Default)]
pub struct CreateOtp {
    /// Canonical recipient field
    pub recipient: Option<String>,

    /// Legacy alias for `recipient`; takes precedence when both are set
    pub phone: Option<String>,

    /// Delivery channel selection; falls back to the configured default
    pub target_type: Option<TargetType>,

    /// Message body override for phone delivery; `%code%` is substituted
    pub content: Option<String>,

    /// Requested validity window in seconds
    pub expires_in: Option<u64>,

    /// Requested code length in digits
    pub otp_length: Option<u32>,
}

impl CreateOtp {
    /// Collapse the dual recipient fields into one canonical value.
    ///
    /// The `phone` alias exists for backward compatibility and wins over
    /// `recipient`; normalization happens only here, never downstream.
    pub fn normalized_recipient(&self) -> Option<&str> {
        non_empty(self.phone.as_deref()).or_else(|| non_empty(self.recipient.as_deref()))
    }
}

/// Verification request with the same dual-field normalization
#[derive(Debug, Clone, Default)]
pub struct VerifyOtp {
    pub recipient: Option<String>,
    pub phone: Option<String>,
    pub code: String,
}

impl VerifyOtp {
    pub fn normalized_recipient(&self) -> Option<&str> {
        non_empty(self.phone.as_deref()).or_else(|| non_empty(self.recipient.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty()).map(str::trim)
}
