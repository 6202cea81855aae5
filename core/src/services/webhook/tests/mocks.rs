//! In-memory mock implementations for dispatcher tests

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::webhook::{WebhookConfig, WebhookEnvelope};
use crate::services::otp::{ChannelError, MessageChannel};
use crate::services::webhook::traits::{WebhookConfigStore, WebhookPoster};

/// Config store serving a fixed configuration
pub struct MockConfigStore {
    pub config: Mutex<WebhookConfig>,
    pub should_fail: bool,
}

impl MockConfigStore {
    pub fn with_config(config: WebhookConfig) -> Self {
        Self {
            config: Mutex::new(config),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            config: Mutex::new(WebhookConfig::with_default_url(None)),
            should_fail: true,
        }
    }
}

#[async_trait]
impl WebhookConfigStore for MockConfigStore {
    async fn read(&self) -> Result<WebhookConfig, String> {
        if self.should_fail {
            return Err("config store unavailable".to_string());
        }
        Ok(self.config.lock().unwrap().clone())
    }

    async fn write(&self, config: &WebhookConfig) -> Result<(), String> {
        if self.should_fail {
            return Err("config store unavailable".to_string());
        }
        *self.config.lock().unwrap() = config.clone();
        Ok(())
    }
}

/// Poster that records every outbound call
pub struct MockPoster {
    pub posts: Mutex<Vec<(String, WebhookEnvelope)>>,
    pub should_fail: bool,
}

impl MockPoster {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<(String, WebhookEnvelope)> {
        self.posts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl WebhookPoster for MockPoster {
    async fn post(&self, url: &str, envelope: &WebhookEnvelope) -> Result<u16, String> {
        if self.should_fail {
            return Err("connection refused".to_string());
        }
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), envelope.clone()));
        Ok(200)
    }
}

/// Transport recording every text it is asked to send
pub struct MockTransport {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<(String, String)> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl MessageChannel for MockTransport {
    async fn send_text(&self, address: &str, text: &str) -> Result<(), ChannelError> {
        self.sent
            .lock()
            .unwrap()
            .push((address.to_string(), text.to_string()));
        Ok(())
    }
}
