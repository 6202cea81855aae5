//! Webhook event catalogue, relay configuration, and wire envelope.
//!
//! The catalogue of transport events is fixed at compile time; the
//! persisted configuration only toggles per-event delivery and the target
//! URL, it never adds or removes event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed catalogue of transport events the dispatcher republishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebhookEventType {
    #[serde(rename = "connection.update")]
    ConnectionUpdate,
    #[serde(rename = "creds.update")]
    CredsUpdate,
    #[serde(rename = "messaging-history.set")]
    MessagingHistorySet,
    #[serde(rename = "chats.upsert")]
    ChatsUpsert,
    #[serde(rename = "chats.update")]
    ChatsUpdate,
    #[serde(rename = "chats.delete")]
    ChatsDelete,
    #[serde(rename = "presence.update")]
    PresenceUpdate,
    #[serde(rename = "contacts.upsert")]
    ContactsUpsert,
    #[serde(rename = "contacts.update")]
    ContactsUpdate,
    #[serde(rename = "messages.delete")]
    MessagesDelete,
    #[serde(rename = "messages.update")]
    MessagesUpdate,
    #[serde(rename = "messages.media-update")]
    MessagesMediaUpdate,
    #[serde(rename = "messages.upsert")]
    MessagesUpsert,
    #[serde(rename = "messages.reaction")]
    MessagesReaction,
    #[serde(rename = "message-receipt.update")]
    MessageReceiptUpdate,
    #[serde(rename = "groups.upsert")]
    GroupsUpsert,
    #[serde(rename = "groups.update")]
    GroupsUpdate,
    #[serde(rename = "group-participants.update")]
    GroupParticipantsUpdate,
    #[serde(rename = "blocklist.set")]
    BlocklistSet,
    #[serde(rename = "blocklist.update")]
    BlocklistUpdate,
}

/// Every catalogue member, in canonical order
pub const EVENT_CATALOGUE: [WebhookEventType; 20] = [
    WebhookEventType::ConnectionUpdate,
    WebhookEventType::CredsUpdate,
    WebhookEventType::MessagingHistorySet,
    WebhookEventType::ChatsUpsert,
    WebhookEventType::ChatsUpdate,
    WebhookEventType::ChatsDelete,
    WebhookEventType::PresenceUpdate,
    WebhookEventType::ContactsUpsert,
    WebhookEventType::ContactsUpdate,
    WebhookEventType::MessagesDelete,
    WebhookEventType::MessagesUpdate,
    WebhookEventType::MessagesMediaUpdate,
    WebhookEventType::MessagesUpsert,
    WebhookEventType::MessagesReaction,
    WebhookEventType::MessageReceiptUpdate,
    WebhookEventType::GroupsUpsert,
    WebhookEventType::GroupsUpdate,
    WebhookEventType::GroupParticipantsUpdate,
    WebhookEventType::BlocklistSet,
    WebhookEventType::BlocklistUpdate,
];

impl WebhookEventType {
    /// Wire name of this event type
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookEventType::ConnectionUpdate => "connection.update",
            WebhookEventType::CredsUpdate => "creds.update",
            WebhookEventType::MessagingHistorySet => "messaging-history.set",
            WebhookEventType::ChatsUpsert => "chats.upsert",
            WebhookEventType::ChatsUpdate => "chats.update",
            WebhookEventType::ChatsDelete => "chats.delete",
            WebhookEventType::PresenceUpdate => "presence.update",
            WebhookEventType::ContactsUpsert => "contacts.upsert",
            WebhookEventType::ContactsUpdate => "contacts.update",
            WebhookEventType::MessagesDelete => "messages.delete",
            WebhookEventType::MessagesUpdate => "messages.update",
            WebhookEventType::MessagesMediaUpdate => "messages.media-update",
            WebhookEventType::MessagesUpsert => "messages.upsert",
            WebhookEventType::MessagesReaction => "messages.reaction",
            WebhookEventType::MessageReceiptUpdate => "message-receipt.update",
            WebhookEventType::GroupsUpsert => "groups.upsert",
            WebhookEventType::GroupsUpdate => "groups.update",
            WebhookEventType::GroupParticipantsUpdate => "group-participants.update",
            WebhookEventType::BlocklistSet => "blocklist.set",
            WebhookEventType::BlocklistUpdate => "blocklist.update",
        }
    }

    /// Parse a wire name back into a catalogue member
    pub fn parse(value: &str) -> Option<Self> {
        EVENT_CATALOGUE.iter().copied().find(|e| e.as_str() == value)
    }
}

impl std::fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-event delivery flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEventSetting {
    #[serde(rename = "type")]
    pub event_type: WebhookEventType,
    pub enabled: bool,
}

/// Administratively mutable relay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Destination for outbound envelopes; absent makes dispatch a no-op
    #[serde(default)]
    pub url: Option<String>,

    /// One flag per catalogue member
    #[serde(default)]
    pub events: Vec<WebhookEventSetting>,
}

impl WebhookConfig {
    /// Initial configuration: the given URL and every event disabled
    pub fn with_default_url(url: Option<String>) -> Self {
        Self {
            url,
            events: Self::default_events(),
        }
    }

    /// Every catalogue member, disabled
    pub fn default_events() -> Vec<WebhookEventSetting> {
        EVENT_CATALOGUE
            .iter()
            .map(|&event_type| WebhookEventSetting {
                event_type,
                enabled: false,
            })
            .collect()
    }

    /// Whether delivery is enabled for the given event type
    pub fn is_enabled(&self, event_type: WebhookEventType) -> bool {
        self.events
            .iter()
            .any(|setting| setting.event_type == event_type && setting.enabled)
    }

    /// Target URL if one is configured and non-empty
    pub fn target_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Rebuild the event list in canonical catalogue order.
    ///
    /// Unknown types cannot occur (the enum rejects them at parse time);
    /// missing types are filled in as disabled, duplicates collapse to the
    /// first occurrence.
    pub fn normalize(&mut self) {
        let provided = std::mem::take(&mut self.events);
        self.events = EVENT_CATALOGUE
            .iter()
            .map(|&event_type| WebhookEventSetting {
                event_type,
                enabled: provided
                    .iter()
                    .find(|s| s.event_type == event_type)
                    .map(|s| s.enabled)
                    .unwrap_or(false),
            })
            .collect();
    }
}

/// The wire shape of a forwarded event; constructed fresh per dispatch and
/// never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    pub event_type: WebhookEventType,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl WebhookEnvelope {
    pub fn new(event_type: WebhookEventType, data: serde_json::Value) -> Self {
        Self {
            event_type,
            data,
            created_at: Utc::now(),
        }
    }
}
