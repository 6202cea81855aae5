//! Webhook relay defaults and backing file location

use serde::{Deserialize, Serialize};

/// Webhook relay settings
///
/// The live target URL and per-event flags are administered at runtime and
/// persisted by the webhook config store; this only carries the process-level
/// defaults used when no persisted configuration exists yet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookSettings {
    /// Target URL seeded into the config store on first read
    pub default_url: Option<String>,

    /// Path of the persisted webhook configuration file
    pub config_path: String,

    /// Welcome message sent into a freshly created group; `%chat_id%` is
    /// substituted with the group's routing identifier
    pub group_welcome_message: Option<String>,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            default_url: None,
            config_path: String::from("config.json"),
            group_welcome_message: None,
        }
    }
}

impl WebhookSettings {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            default_url: std::env::var("DEFAULT_WEBHOOK_URL").ok().filter(|v| !v.is_empty()),
            config_path: std::env::var("WEBHOOK_CONFIG_PATH")
                .unwrap_or_else(|_| "config.json".to_string()),
            group_welcome_message: std::env::var("GROUP_WELCOME_MESSAGE").ok(),
        }
    }
}
