//! # OTP Gateway Infrastructure
//!
//! Concrete implementations behind the core service traits:
//! - **Cache**: Redis-backed TTL record store
//! - **Channels**: messaging gateway HTTP client and SMTP email delivery
//! - **Transport**: shared session status holder
//! - **Webhook**: file-backed relay configuration and the HTTP poster

pub mod cache;
pub mod channels;
pub mod transport;
pub mod webhook;

use thiserror::Error;

/// Infrastructure-level failures, kept separate from domain errors
#[derive(Error, Debug)]
pub enum InfraError {
    /// Invalid or unusable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Redis connectivity or command failure
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Filesystem failure in the webhook config store
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Record or config (de)serialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Outbound HTTP failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub use cache::{RedisClient, RedisOtpStore};
pub use channels::{GatewayMessageChannel, MockMessageChannel, SmtpEmailChannel};
pub use transport::{SessionState, SessionStatus};
pub use webhook::{FileWebhookConfigStore, ReqwestWebhookPoster};
