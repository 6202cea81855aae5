//! Webhook configuration DTOs

use serde::Deserialize;

use og_core::domain::entities::webhook::{WebhookConfig, WebhookEventSetting};

/// Full-replacement update of the relay configuration.
///
/// Omitted events come back disabled; there is no partial merge.
#[derive(Debug, Deserialize)]
pub struct UpdateWebhookConfigRequest {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub events: Vec<WebhookEventSetting>,
}

impl From<UpdateWebhookConfigRequest> for WebhookConfig {
    fn from(request: UpdateWebhookConfigRequest) -> Self {
        let mut config = WebhookConfig {
            url: request.url,
            events: request.events,
        };
        config.normalize();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use og_core::domain::entities::webhook::{WebhookEventType, EVENT_CATALOGUE};

    #[test]
    fn test_update_is_full_replacement() {
        let request: UpdateWebhookConfigRequest = serde_json::from_value(serde_json::json!({
            "url": "https://example.test/hook",
            "events": [ { "type": "chats.upsert", "enabled": true } ]
        }))
        .unwrap();

        let config = WebhookConfig::from(request);
        assert_eq!(config.events.len(), EVENT_CATALOGUE.len());
        assert!(config.is_enabled(WebhookEventType::ChatsUpsert));
        assert!(!config.is_enabled(WebhookEventType::MessagesUpsert));
    }

    #[test]
    fn test_unknown_event_type_fails_deserialization() {
        let result = serde_json::from_value::<UpdateWebhookConfigRequest>(serde_json::json!({
            "events": [ { "type": "messages.unknown", "enabled": true } ]
        }));
        assert!(result.is_err());
    }
}
