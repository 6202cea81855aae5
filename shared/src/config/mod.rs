//! Configuration module with business-specific sub-modules
//!
//! Each sub-module owns one configuration concern and knows how to load
//! itself from environment variables:
//! - `auth` - Static API token authorization
//! - `cache` - TTL record store (Redis) configuration
//! - `channels` - Messaging gateway and SMTP delivery configuration
//! - `otp` - OTP issuance defaults and testing allow-lists
//! - `server` - HTTP server binding
//! - `webhook` - Webhook relay defaults and backing file location

pub mod auth;
pub mod cache;
pub mod channels;
pub mod otp;
pub mod server;
pub mod webhook;

use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use channels::{MessagingConfig, SmtpConfig};
pub use otp::OtpConfig;
pub use server::ServerConfig;
pub use webhook::WebhookSettings;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// TTL record store configuration
    pub cache: CacheConfig,

    /// Static bearer-token authorization
    pub auth: AuthConfig,

    /// OTP issuance defaults
    pub otp: OtpConfig,

    /// Webhook relay defaults
    pub webhook: WebhookSettings,

    /// Messaging gateway configuration
    pub messaging: MessagingConfig,

    /// SMTP delivery configuration
    pub smtp: SmtpConfig,
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: AuthConfig::from_env(),
            otp: OtpConfig::from_env(),
            webhook: WebhookSettings::from_env(),
            messaging: MessagingConfig::from_env(),
            smtp: SmtpConfig::from_env(),
        }
    }
}

/// Split a comma-separated environment value into trimmed, non-empty items
pub(crate) fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
