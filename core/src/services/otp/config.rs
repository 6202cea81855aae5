//! Configuration for the OTP engine

use og_shared::config::cache::MAX_RECORD_TTL_SECONDS;
use og_shared::config::otp::{DEFAULT_CODE_LENGTH, DEFAULT_EXPIRES_IN_SECONDS};
use og_shared::config::{CacheConfig, OtpConfig};

use crate::domain::entities::otp_record::TargetType;

/// Configuration for the OTP engine
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Target type used when a create request does not name one
    pub default_target_type: TargetType,

    /// Default message body for phone delivery; `%code%` is substituted
    pub default_content: String,

    /// Company name substituted into the email template and subject
    pub company_name: String,

    /// Default number of digits in a generated code
    pub default_code_length: u32,

    /// Default validity window in seconds
    pub default_expires_in: u64,

    /// Hard cap on the validity window; requested windows are clamped here
    pub max_expires_in: u64,

    /// Recipients that bypass storage and delivery entirely
    pub testing_recipients: Vec<String>,

    /// Codes accepted for testing recipients during verification
    pub testing_codes: Vec<String>,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            default_target_type: TargetType::Phone,
            default_content: String::from("Your verification code is %code%"),
            company_name: String::from("OTP Gateway"),
            default_code_length: DEFAULT_CODE_LENGTH,
            default_expires_in: DEFAULT_EXPIRES_IN_SECONDS,
            max_expires_in: MAX_RECORD_TTL_SECONDS,
            testing_recipients: Vec::new(),
            testing_codes: Vec::new(),
        }
    }
}

impl OtpServiceConfig {
    /// Build from the process-level settings
    pub fn from_settings(otp: &OtpConfig, cache: &CacheConfig) -> Self {
        Self {
            default_target_type: TargetType::parse(&otp.default_target_type)
                .unwrap_or(TargetType::Phone),
            default_content: otp.default_content.clone(),
            company_name: otp.company_name.clone(),
            default_code_length: otp.default_code_length,
            default_expires_in: otp.default_expires_in,
            max_expires_in: cache.max_record_ttl,
            testing_recipients: otp.testing_recipients.clone(),
            testing_codes: otp.testing_codes.clone(),
        }
    }

    /// Whether the recipient is on the testing allow-list
    pub fn is_testing_recipient(&self, recipient: &str) -> bool {
        self.testing_recipients.iter().any(|r| r == recipient)
    }

    /// Whether the code is on the testing allow-list
    pub fn is_testing_code(&self, code: &str) -> bool {
        self.testing_codes.iter().any(|c| c == code)
    }
}
