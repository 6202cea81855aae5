//! Shared application state

use std::sync::Arc;

use og_core::services::{
    EmailChannel, MessageChannel, OtpService, OtpStore, WebhookConfigStore, WebhookDispatcher,
    WebhookPoster,
};
use og_infra::SessionState;
use og_shared::config::AuthConfig;

/// Services shared across request handlers.
///
/// Generic over the core traits so tests can wire in-memory
/// implementations through the same state type the binary uses.
pub struct AppState<S, M, E, C, P>
where
    S: OtpStore,
    M: MessageChannel,
    E: EmailChannel,
    C: WebhookConfigStore,
    P: WebhookPoster,
{
    pub otp_service: Arc<OtpService<S, M, E>>,
    pub dispatcher: Arc<WebhookDispatcher<C, P, M>>,
    pub config_store: Arc<C>,
    pub messages: Arc<M>,
    pub session: SessionState,
    pub auth: AuthConfig,
}
