//! OTP gateway server binary

use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use og_api::{create_app, AppState};
use og_core::services::{OtpService, OtpServiceConfig, WebhookDispatcher};
use og_infra::{
    FileWebhookConfigStore, GatewayMessageChannel, RedisClient, RedisOtpStore,
    ReqwestWebhookPoster, SessionState, SessionStatus, SmtpEmailChannel,
};
use og_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(address = %config.server.bind_address(), "Starting OTP gateway");

    let redis = RedisClient::new(&config.cache)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let store = Arc::new(RedisOtpStore::new(redis, config.cache.clone()));

    // The external transport session is assumed reachable whenever the
    // messaging channel is enabled; status updates arrive at runtime.
    let session = SessionState::new(if config.messaging.enabled {
        SessionStatus::Online
    } else {
        SessionStatus::Offline
    });
    let messages = Arc::new(GatewayMessageChannel::new(&config.messaging, session.clone()));
    let email = Arc::new(
        SmtpEmailChannel::new(&config.smtp)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );

    let otp_config = OtpServiceConfig::from_settings(&config.otp, &config.cache);
    let otp_service = Arc::new(OtpService::new(
        store,
        messages.clone(),
        email,
        otp_config,
    ));

    let config_store = Arc::new(FileWebhookConfigStore::new(
        config.webhook.config_path.clone(),
        config.webhook.default_url.clone(),
    ));
    let poster = Arc::new(ReqwestWebhookPoster::new());
    let dispatcher = Arc::new(WebhookDispatcher::new(
        config_store.clone(),
        poster,
        messages.clone(),
        config.webhook.group_welcome_message.clone(),
    ));

    let state = web::Data::new(AppState {
        otp_service,
        dispatcher,
        config_store,
        messages,
        session,
        auth: config.auth.clone(),
    });

    let bind_address = config.server.bind_address();
    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
