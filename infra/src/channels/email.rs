//! SMTP email channel
//!
//! When no SMTP host is configured the channel runs in no-op mode and
//! only logs the would-be delivery, which keeps local development working
//! without a mail relay.

use async_trait::async_trait;
use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, info};

use og_core::services::{ChannelError, EmailChannel};
use og_shared::config::SmtpConfig;

use crate::InfraError;

pub struct SmtpEmailChannel {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    sender: String,
}

impl SmtpEmailChannel {
    pub fn new(config: &SmtpConfig) -> Result<Self, InfraError> {
        if config.host.is_empty() {
            info!("SMTP host not configured, email channel running in no-op mode");
            return Ok(Self {
                transport: None,
                sender: config.sender.clone(),
            });
        }

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| InfraError::Config(format!("invalid SMTP relay: {}", e)))?;

        if let Some(port) = config.port {
            builder = builder.port(port);
        }
        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: Some(builder.build()),
            sender: config.sender.clone(),
        })
    }
}

#[async_trait]
impl EmailChannel for SmtpEmailChannel {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), ChannelError> {
        let transport = match &self.transport {
            Some(transport) => transport,
            None => {
                info!(subject = subject, "Email channel in no-op mode, skipping delivery");
                return Ok(());
            }
        };

        let message = Message::builder()
            .from(
                self.sender
                    .parse()
                    .map_err(|e| ChannelError::Delivery(format!("invalid sender address: {}", e)))?,
            )
            .to(to
                .parse()
                .map_err(|e| ChannelError::Delivery(format!("invalid recipient address: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html.to_string())
            .map_err(|e| ChannelError::Delivery(format!("message build failed: {}", e)))?;

        transport
            .send(message)
            .await
            .map_err(|e| ChannelError::Delivery(e.to_string()))?;

        debug!("Email handed to SMTP relay");
        Ok(())
    }
}
