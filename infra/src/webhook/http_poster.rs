//! Outbound webhook delivery over HTTP

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use og_core::domain::entities::webhook::WebhookEnvelope;
use og_core::services::WebhookPoster;

const POST_TIMEOUT_SECS: u64 = 10;

pub struct ReqwestWebhookPoster {
    http: reqwest::Client,
}

impl ReqwestWebhookPoster {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(POST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { http }
    }
}

impl Default for ReqwestWebhookPoster {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebhookPoster for ReqwestWebhookPoster {
    async fn post(&self, url: &str, envelope: &WebhookEnvelope) -> Result<u16, String> {
        debug!(url = url, event_type = %envelope.event_type, "POSTing envelope");

        let response = self
            .http
            .post(url)
            .json(envelope)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(response.status().as_u16())
    }
}
