//! File-backed webhook configuration store
//!
//! The relay configuration lives in a small JSON file next to the
//! process so operators can inspect and hand-edit it. The dispatcher
//! re-reads it per event, which is what makes hand edits take effect
//! without a restart.
//!
//! Persisted layout:
//!
//! ```json
//! { "webhook": { "url": "https://...", "events": [ { "type": "chats.upsert", "enabled": true } ] } }
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use og_core::domain::entities::webhook::WebhookConfig;
use og_core::services::WebhookConfigStore;

/// On-disk wrapper, namespacing the relay block for future settings
#[derive(Serialize, Deserialize)]
struct PersistedConfig {
    webhook: WebhookConfig,
}

pub struct FileWebhookConfigStore {
    path: PathBuf,
    default_url: Option<String>,
}

impl FileWebhookConfigStore {
    pub fn new(path: impl Into<PathBuf>, default_url: Option<String>) -> Self {
        Self {
            path: path.into(),
            default_url,
        }
    }

    async fn persist(&self, config: &WebhookConfig) -> Result<(), String> {
        let persisted = PersistedConfig {
            webhook: config.clone(),
        };
        let json = serde_json::to_string_pretty(&persisted)
            .map_err(|e| format!("config serialization: {}", e))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| format!("writing {}: {}", self.path.display(), e))
    }
}

#[async_trait]
impl WebhookConfigStore for FileWebhookConfigStore {
    async fn read(&self) -> Result<WebhookConfig, String> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // First read seeds the file with defaults so operators
                // have something concrete to edit.
                let config = WebhookConfig::with_default_url(self.default_url.clone());
                self.persist(&config).await?;
                info!(path = %self.path.display(), "Seeded webhook configuration file");
                return Ok(config);
            }
            Err(e) => return Err(format!("reading {}: {}", self.path.display(), e)),
        };

        let persisted: PersistedConfig =
            serde_json::from_str(&raw).map_err(|e| format!("config deserialization: {}", e))?;

        let mut config = persisted.webhook;
        // Hand-edited files may omit or reorder entries
        config.normalize();
        debug!(path = %self.path.display(), "Loaded webhook configuration");
        Ok(config)
    }

    async fn write(&self, config: &WebhookConfig) -> Result<(), String> {
        self.persist(config).await?;
        info!(path = %self.path.display(), "Updated webhook configuration");
        Ok(())
    }
}
