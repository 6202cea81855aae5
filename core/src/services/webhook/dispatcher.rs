//! Dispatcher implementation

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::entities::webhook::{WebhookEnvelope, WebhookEventType};
use crate::services::otp::MessageChannel;

use super::traits::{WebhookConfigStore, WebhookPoster};

/// Message stub marking a freshly created group in a `messages.upsert` payload
const GROUP_CREATE_STUB: &str = "GROUP_CREATE";

/// Placeholder substituted with the group's routing identifier
const CHAT_ID_PLACEHOLDER: &str = "%chat_id%";

/// Republishes transport events to the configured webhook endpoint.
///
/// One invocation per emitted event; invocations for different event
/// types share no mutable state. The configuration is re-read from its
/// store on every dispatch so administrative edits apply immediately.
pub struct WebhookDispatcher<C: WebhookConfigStore, P: WebhookPoster, M: MessageChannel> {
    config_store: Arc<C>,
    poster: Arc<P>,
    transport: Arc<M>,
    group_welcome_message: Option<String>,
}

impl<C: WebhookConfigStore, P: WebhookPoster, M: MessageChannel> WebhookDispatcher<C, P, M> {
    pub fn new(
        config_store: Arc<C>,
        poster: Arc<P>,
        transport: Arc<M>,
        group_welcome_message: Option<String>,
    ) -> Self {
        Self {
            config_store,
            poster,
            transport,
            group_welcome_message,
        }
    }

    /// Handle one emitted transport event.
    ///
    /// Never returns an error: forwarding problems must not destabilize
    /// the emitting session, so every failure path logs and returns.
    pub async fn dispatch(&self, event_type: WebhookEventType, payload: Value) {
        if event_type == WebhookEventType::MessagesUpsert {
            // Side effect independent of forwarding; runs regardless of
            // whether the envelope goes out.
            self.welcome_new_group(&payload).await;
        }

        let envelope = WebhookEnvelope::new(event_type, payload);

        let config = match self.config_store.read().await {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    event_type = %event_type,
                    error = %e,
                    "Could not read webhook configuration, dropping event"
                );
                return;
            }
        };

        let url = match config.target_url() {
            Some(url) => url.to_string(),
            None => {
                debug!(event_type = %event_type, "Webhook URL not configured, skipping forward");
                return;
            }
        };

        if !config.is_enabled(event_type) {
            debug!(event_type = %event_type, "Event type disabled, skipping forward");
            return;
        }

        match self.poster.post(&url, &envelope).await {
            Ok(status) => {
                info!(
                    event_type = %event_type,
                    status = status,
                    "Forwarded event to webhook"
                );
            }
            Err(e) => {
                warn!(
                    event_type = %event_type,
                    error = %e,
                    "Webhook delivery failed, event dropped"
                );
            }
        }
    }

    /// Send the configured welcome message into a group the session was
    /// just added to, substituting its routing identifier.
    async fn welcome_new_group(&self, payload: &Value) {
        let template = match &self.group_welcome_message {
            Some(template) => template,
            None => return,
        };

        let message = &payload["messages"][0];
        if message["messageStubType"].as_str() != Some(GROUP_CREATE_STUB) {
            return;
        }

        let chat_id = match message["key"]["remoteJid"].as_str() {
            Some(chat_id) => chat_id,
            None => {
                warn!("Group-create stub without a routing identifier, skipping welcome");
                return;
            }
        };

        let text = template.replace(CHAT_ID_PLACEHOLDER, chat_id);
        match self.transport.send_text(chat_id, &text).await {
            Ok(()) => info!(chat_id = chat_id, "Sent group welcome message"),
            Err(e) => warn!(chat_id = chat_id, error = %e, "Failed to send group welcome message"),
        }
    }
}
