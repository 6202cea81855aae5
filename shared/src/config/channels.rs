//! Delivery channel configuration: messaging gateway and SMTP

use serde::{Deserialize, Serialize};

/// Messaging gateway configuration
///
/// The gateway process does not drive the messaging transport itself; it
/// talks to an external session over HTTP.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagingConfig {
    /// Whether messaging delivery is enabled at all
    pub enabled: bool,

    /// Base URL of the external transport session API
    pub gateway_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            gateway_url: String::from("http://localhost:3001"),
            request_timeout_secs: 30,
        }
    }
}

impl MessagingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            enabled: std::env::var("ENABLE_MESSAGING")
                .map(|v| v == "true")
                .unwrap_or(defaults.enabled),
            gateway_url: std::env::var("MESSAGING_GATEWAY_URL").unwrap_or(defaults.gateway_url),
            request_timeout_secs: std::env::var("MESSAGING_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

/// SMTP delivery configuration
///
/// An unset host puts the email channel into no-op mode; messages are
/// logged instead of sent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// SMTP relay host; empty disables real delivery
    pub host: String,

    /// SMTP port
    pub port: Option<u16>,

    /// SMTP credentials
    pub username: Option<String>,
    pub password: Option<String>,

    /// Sender address placed in the `From` header
    pub sender: String,

    /// Default subject when a request supplies none
    pub default_subject: String,
}

impl SmtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("SMTP_HOST").unwrap_or_default(),
            port: std::env::var("SMTP_PORT").ok().and_then(|v| v.parse().ok()),
            username: std::env::var("SMTP_USERNAME").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
            sender: std::env::var("SMTP_SENDER_EMAIL").unwrap_or_default(),
            default_subject: std::env::var("DEFAULT_EMAIL_SUBJECT")
                .unwrap_or_else(|_| "Your verification code".to_string()),
        }
    }
}
