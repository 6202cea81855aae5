//! Traits for webhook configuration persistence and outbound delivery

use async_trait::async_trait;

use crate::domain::entities::webhook::{WebhookConfig, WebhookEnvelope};

/// Persistence for the administratively mutable relay configuration.
///
/// `read` is called on every dispatch so external edits take effect
/// without a process restart; implementations should treat a missing
/// backing record as "create with defaults on first read".
#[async_trait]
pub trait WebhookConfigStore: Send + Sync {
    async fn read(&self) -> Result<WebhookConfig, String>;
    async fn write(&self, config: &WebhookConfig) -> Result<(), String>;
}

/// Outbound delivery of a single envelope
#[async_trait]
pub trait WebhookPoster: Send + Sync {
    /// POST the envelope to `url`, returning the remote HTTP status
    async fn post(&self, url: &str, envelope: &WebhookEnvelope) -> Result<u16, String>;
}
