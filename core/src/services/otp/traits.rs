//! Traits for record storage and delivery channel integration

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::otp_record::OtpRecord;

/// Failure modes of a delivery channel
#[derive(Error, Debug)]
pub enum ChannelError {
    /// No transport session is available to carry the message
    #[error("no transport session available")]
    NoSession,

    /// The provider accepted the request but delivery failed
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// TTL key-value store holding pending verification records.
///
/// Implementations must keep per-key get/set/delete atomic; the engine
/// relies on single-key atomicity rather than cross-operation locks.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a record under `key`, replacing any live record, with a
    /// store-level TTL in seconds as a secondary expiry defense
    async fn put(&self, key: &str, record: &OtpRecord, ttl_seconds: u64) -> Result<(), String>;

    /// Fetch the record under `key`, if one is live
    async fn get(&self, key: &str) -> Result<Option<OtpRecord>, String>;

    /// Remove the record under `key`
    async fn delete(&self, key: &str) -> Result<(), String>;
}

/// Text-message delivery through the external transport session
#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send_text(&self, address: &str, text: &str) -> Result<(), ChannelError>;
}

/// Transactional email delivery
#[async_trait]
pub trait EmailChannel: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), ChannelError>;
}
