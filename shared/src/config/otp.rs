//! OTP issuance defaults and testing allow-lists

use serde::{Deserialize, Serialize};

use super::split_csv;

/// Default validity window for issued codes: 5 minutes
pub const DEFAULT_EXPIRES_IN_SECONDS: u64 = 300;

/// Default number of digits in a generated code
pub const DEFAULT_CODE_LENGTH: u32 = 6;

/// OTP issuance configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Target type used when a create request does not name one
    /// (`PHONE` or `EMAIL`)
    pub default_target_type: String,

    /// Default message body for phone delivery; `%code%` is substituted
    pub default_content: String,

    /// Company name substituted into the email template
    pub company_name: String,

    /// Default code length in digits
    pub default_code_length: u32,

    /// Default validity window in seconds
    pub default_expires_in: u64,

    /// Recipients that short-circuit issuance/verification for QA and
    /// load testing without touching the store or a delivery channel
    pub testing_recipients: Vec<String>,

    /// Codes accepted for testing recipients during verification
    pub testing_codes: Vec<String>,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            default_target_type: String::from("PHONE"),
            default_content: String::from("Your verification code is %code%"),
            company_name: String::from("OTP Gateway"),
            default_code_length: DEFAULT_CODE_LENGTH,
            default_expires_in: DEFAULT_EXPIRES_IN_SECONDS,
            testing_recipients: Vec::new(),
            testing_codes: Vec::new(),
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            default_target_type: std::env::var("DEFAULT_OTP_TARGET_TYPE")
                .unwrap_or(defaults.default_target_type),
            default_content: std::env::var("DEFAULT_OTP_CONTENT")
                .unwrap_or(defaults.default_content),
            company_name: std::env::var("COMPANY_NAME").unwrap_or(defaults.company_name),
            default_code_length: std::env::var("OTP_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_code_length),
            default_expires_in: std::env::var("OTP_EXPIRES_IN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_expires_in),
            testing_recipients: std::env::var("TESTING_RECIPIENTS")
                .map(|v| split_csv(&v))
                .unwrap_or_default(),
            testing_codes: std::env::var("TESTING_OTPS")
                .map(|v| split_csv(&v))
                .unwrap_or_default(),
        }
    }
}
