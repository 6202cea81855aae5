//! Unit tests for the webhook dispatcher

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::webhook::{WebhookConfig, WebhookEventType};
use crate::services::webhook::WebhookDispatcher;

use super::mocks::{MockConfigStore, MockPoster, MockTransport};

type TestDispatcher = WebhookDispatcher<MockConfigStore, MockPoster, MockTransport>;

fn enabled_config(url: &str, enabled: &[WebhookEventType]) -> WebhookConfig {
    let mut config = WebhookConfig::with_default_url(Some(url.to_string()));
    for setting in &mut config.events {
        setting.enabled = enabled.contains(&setting.event_type);
    }
    config
}

fn dispatcher_with(
    store: MockConfigStore,
    welcome: Option<String>,
) -> (TestDispatcher, Arc<MockConfigStore>, Arc<MockPoster>, Arc<MockTransport>) {
    dispatcher_parts(store, MockPoster::new(), welcome)
}

fn dispatcher_parts(
    store: MockConfigStore,
    poster: MockPoster,
    welcome: Option<String>,
) -> (TestDispatcher, Arc<MockConfigStore>, Arc<MockPoster>, Arc<MockTransport>) {
    let store = Arc::new(store);
    let poster = Arc::new(poster);
    let transport = Arc::new(MockTransport::new());
    let dispatcher = WebhookDispatcher::new(
        store.clone(),
        poster.clone(),
        transport.clone(),
        welcome,
    );
    (dispatcher, store, poster, transport)
}

#[tokio::test]
async fn test_enabled_event_is_forwarded_with_envelope() {
    let config = enabled_config("https://example.test/hook", &[WebhookEventType::ChatsUpsert]);
    let (dispatcher, _, poster, _) =
        dispatcher_with(MockConfigStore::with_config(config), None);

    dispatcher
        .dispatch(WebhookEventType::ChatsUpsert, json!([{"id": "123@g.us"}]))
        .await;

    let (url, envelope) = poster.last().unwrap();
    assert_eq!(url, "https://example.test/hook");
    assert_eq!(envelope.event_type, WebhookEventType::ChatsUpsert);
    assert_eq!(envelope.data, json!([{"id": "123@g.us"}]));
}

#[tokio::test]
async fn test_disabled_event_is_not_forwarded() {
    let config = enabled_config("https://example.test/hook", &[WebhookEventType::ChatsUpsert]);
    let (dispatcher, _, poster, _) =
        dispatcher_with(MockConfigStore::with_config(config), None);

    dispatcher
        .dispatch(WebhookEventType::ChatsUpsert, json!([{"id": "a"}]))
        .await;
    dispatcher
        .dispatch(WebhookEventType::ChatsUpdate, json!([{"id": "b"}]))
        .await;

    // Exactly one outbound call, carrying the enabled type
    assert_eq!(poster.post_count(), 1);
    let (_, envelope) = poster.last().unwrap();
    assert_eq!(envelope.event_type, WebhookEventType::ChatsUpsert);
}

#[tokio::test]
async fn test_unset_url_is_a_silent_no_op() {
    let config = enabled_config("", &[WebhookEventType::ChatsUpsert]);
    let (dispatcher, _, poster, _) =
        dispatcher_with(MockConfigStore::with_config(config), None);

    dispatcher
        .dispatch(WebhookEventType::ChatsUpsert, json!([]))
        .await;
    assert_eq!(poster.post_count(), 0);
}

#[tokio::test]
async fn test_config_edits_apply_without_restart() {
    let config = enabled_config("https://example.test/hook", &[]);
    let (dispatcher, store, poster, _) =
        dispatcher_with(MockConfigStore::with_config(config), None);

    dispatcher
        .dispatch(WebhookEventType::GroupsUpdate, json!([]))
        .await;
    assert_eq!(poster.post_count(), 0);

    // External edit between events: enable the type
    {
        let mut live = store.config.lock().unwrap();
        for setting in &mut live.events {
            if setting.event_type == WebhookEventType::GroupsUpdate {
                setting.enabled = true;
            }
        }
    }

    dispatcher
        .dispatch(WebhookEventType::GroupsUpdate, json!([]))
        .await;
    assert_eq!(poster.post_count(), 1);
}

#[tokio::test]
async fn test_delivery_failure_is_swallowed() {
    let config = enabled_config("https://example.test/hook", &[WebhookEventType::CredsUpdate]);
    let (dispatcher, _, poster, _) = dispatcher_parts(
        MockConfigStore::with_config(config),
        MockPoster::failing(),
        None,
    );

    // Must not panic or surface anything
    dispatcher
        .dispatch(WebhookEventType::CredsUpdate, json!({}))
        .await;
    assert_eq!(poster.post_count(), 0);
}

#[tokio::test]
async fn test_config_store_failure_is_swallowed() {
    let (dispatcher, _, poster, _) = dispatcher_with(MockConfigStore::failing(), None);
    dispatcher
        .dispatch(WebhookEventType::ConnectionUpdate, json!({"connection": "open"}))
        .await;
    assert_eq!(poster.post_count(), 0);
}

#[tokio::test]
async fn test_group_create_sends_welcome_message() {
    let config = enabled_config("https://example.test/hook", &[WebhookEventType::MessagesUpsert]);
    let (dispatcher, _, poster, transport) = dispatcher_with(
        MockConfigStore::with_config(config),
        Some("Welcome! This group's chat id is %chat_id%".to_string()),
    );

    let payload = json!({
        "messages": [{
            "messageStubType": "GROUP_CREATE",
            "key": { "remoteJid": "12036304@g.us" }
        }],
        "type": "notify"
    });
    dispatcher
        .dispatch(WebhookEventType::MessagesUpsert, payload)
        .await;

    // Welcome side effect went through the transport, forwarding still ran
    assert_eq!(transport.sent_count(), 1);
    let (address, text) = transport.last_sent().unwrap();
    assert_eq!(address, "12036304@g.us");
    assert_eq!(text, "Welcome! This group's chat id is 12036304@g.us");
    assert_eq!(poster.post_count(), 1);
}

#[tokio::test]
async fn test_ordinary_message_upsert_sends_no_welcome() {
    let config = enabled_config("https://example.test/hook", &[WebhookEventType::MessagesUpsert]);
    let (dispatcher, _, _, transport) = dispatcher_with(
        MockConfigStore::with_config(config),
        Some("Welcome %chat_id%".to_string()),
    );

    let payload = json!({
        "messages": [{
            "key": { "remoteJid": "628111@s.whatsapp.net" },
            "message": { "conversation": "hello" }
        }],
        "type": "notify"
    });
    dispatcher
        .dispatch(WebhookEventType::MessagesUpsert, payload)
        .await;

    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_welcome_runs_even_when_forwarding_disabled() {
    // messages.upsert disabled entirely; the side effect still fires
    let config = enabled_config("https://example.test/hook", &[]);
    let (dispatcher, _, poster, transport) = dispatcher_with(
        MockConfigStore::with_config(config),
        Some("Welcome %chat_id%".to_string()),
    );

    let payload = json!({
        "messages": [{
            "messageStubType": "GROUP_CREATE",
            "key": { "remoteJid": "555@g.us" }
        }]
    });
    dispatcher
        .dispatch(WebhookEventType::MessagesUpsert, payload)
        .await;

    assert_eq!(transport.sent_count(), 1);
    assert_eq!(poster.post_count(), 0);
}
