//! Messaging gateway channel
//!
//! Delivers text messages through the external transport session's HTTP
//! API. The channel consults the shared session status first so callers
//! get a clean "no session" error instead of a connection failure when
//! the transport is down or unlinked.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use og_core::services::{ChannelError, MessageChannel};
use og_shared::config::MessagingConfig;

use crate::transport::SessionState;

#[derive(Serialize)]
struct SendTextRequest<'a> {
    to: &'a str,
    text: &'a str,
}

pub struct GatewayMessageChannel {
    http: reqwest::Client,
    base_url: String,
    enabled: bool,
    session: SessionState,
}

impl GatewayMessageChannel {
    pub fn new(config: &MessagingConfig, session: SessionState) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: config.gateway_url.trim_end_matches('/').to_string(),
            enabled: config.enabled,
            session,
        }
    }
}

#[async_trait]
impl MessageChannel for GatewayMessageChannel {
    async fn send_text(&self, address: &str, text: &str) -> Result<(), ChannelError> {
        if !self.enabled {
            debug!("Messaging channel disabled, refusing delivery");
            return Err(ChannelError::NoSession);
        }
        if !self.session.is_online() {
            warn!(status = %self.session.current(), "Transport session unavailable");
            return Err(ChannelError::NoSession);
        }

        let url = format!("{}/messages", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&SendTextRequest { to: address, text })
            .send()
            .await
            .map_err(|e| ChannelError::Delivery(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChannelError::Delivery(format!(
                "gateway returned status {}",
                response.status()
            )));
        }

        debug!("Message handed to transport session");
        Ok(())
    }
}
