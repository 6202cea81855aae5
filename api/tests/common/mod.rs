//! In-memory service implementations for API integration tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use og_api::AppState;
use og_core::domain::entities::otp_record::OtpRecord;
use og_core::domain::entities::webhook::{WebhookConfig, WebhookEnvelope};
use og_core::services::{
    ChannelError, EmailChannel, MessageChannel, OtpService, OtpServiceConfig, OtpStore,
    WebhookConfigStore, WebhookDispatcher, WebhookPoster,
};
use og_infra::{SessionState, SessionStatus};
use og_shared::config::AuthConfig;

pub const TEST_TOKEN: &str = "test-token";

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

#[async_trait]
impl OtpStore for MemoryStore {
    async fn put(&self, key: &str, record: &OtpRecord, _ttl_seconds: u64) -> Result<(), String> {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), record.clone());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<OtpRecord>, String> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Message channel that records outbound texts; optionally refuses with
/// a no-session error
pub struct RecordingChannel {
    pub sent: Mutex<Vec<(String, String)>>,
    pub offline: bool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            offline: false,
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::new()
        }
    }

    /// Last whitespace-separated token of the last sent text, which is
    /// where the issued code lands with the default content template
    pub fn last_code(&self) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .last()
            .and_then(|(_, text)| text.split_whitespace().last().map(str::to_string))
    }
}

#[async_trait]
impl MessageChannel for RecordingChannel {
    async fn send_text(&self, address: &str, text: &str) -> Result<(), ChannelError> {
        if self.offline {
            return Err(ChannelError::NoSession);
        }
        self.sent
            .lock()
            .unwrap()
            .push((address.to_string(), text.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingEmail {
    pub sent: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl EmailChannel for RecordingEmail {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), ChannelError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), html.to_string()));
        Ok(())
    }
}

pub struct MemoryConfigStore {
    pub config: Mutex<WebhookConfig>,
}

impl MemoryConfigStore {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config: Mutex::new(config),
        }
    }
}

#[async_trait]
impl WebhookConfigStore for MemoryConfigStore {
    async fn read(&self) -> Result<WebhookConfig, String> {
        Ok(self.config.lock().unwrap().clone())
    }

    async fn write(&self, config: &WebhookConfig) -> Result<(), String> {
        *self.config.lock().unwrap() = config.clone();
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingPoster {
    pub posts: Mutex<Vec<(String, WebhookEnvelope)>>,
}

impl RecordingPoster {
    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl WebhookPoster for RecordingPoster {
    async fn post(&self, url: &str, envelope: &WebhookEnvelope) -> Result<u16, String> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), envelope.clone()));
        Ok(200)
    }
}

pub type TestState =
    AppState<MemoryStore, RecordingChannel, RecordingEmail, MemoryConfigStore, RecordingPoster>;

/// Everything a test needs to drive the app and inspect side effects
pub struct TestHarness {
    pub state: web::Data<TestState>,
    pub messages: Arc<RecordingChannel>,
    pub email: Arc<RecordingEmail>,
    pub poster: Arc<RecordingPoster>,
    pub config_store: Arc<MemoryConfigStore>,
}

pub fn harness() -> TestHarness {
    harness_with(RecordingChannel::new(), WebhookConfig::with_default_url(None))
}

pub fn harness_with(messages: RecordingChannel, webhook_config: WebhookConfig) -> TestHarness {
    let store = Arc::new(MemoryStore::default());
    let messages = Arc::new(messages);
    let email = Arc::new(RecordingEmail::default());
    let config_store = Arc::new(MemoryConfigStore::new(webhook_config));
    let poster = Arc::new(RecordingPoster::default());

    let otp_service = Arc::new(OtpService::new(
        store,
        messages.clone(),
        email.clone(),
        OtpServiceConfig {
            company_name: "Acme".to_string(),
            ..OtpServiceConfig::default()
        },
    ));
    let dispatcher = Arc::new(WebhookDispatcher::new(
        config_store.clone(),
        poster.clone(),
        messages.clone(),
        None,
    ));

    let state = web::Data::new(AppState {
        otp_service,
        dispatcher,
        config_store: config_store.clone(),
        messages: messages.clone(),
        session: SessionState::new(SessionStatus::Online),
        auth: AuthConfig {
            api_token: TEST_TOKEN.to_string(),
        },
    });

    TestHarness {
        state,
        messages,
        email,
        poster,
        config_store,
    }
}
