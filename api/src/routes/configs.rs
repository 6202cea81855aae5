//! Webhook configuration endpoints

use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::info;

use og_core::domain::entities::webhook::WebhookConfig;
use og_core::errors::CoreError;
use og_core::services::{
    EmailChannel, MessageChannel, OtpStore, WebhookConfigStore, WebhookPoster,
};
use og_shared::types::response::ApiResponse;

use crate::dto::UpdateWebhookConfigRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// Handler for GET /api/v1/configs/webhooks
pub async fn get_webhook_config<S, M, E, C, P>(
    state: web::Data<AppState<S, M, E, C, P>>,
) -> Result<HttpResponse, ApiError>
where
    S: OtpStore + 'static,
    M: MessageChannel + 'static,
    E: EmailChannel + 'static,
    C: WebhookConfigStore + 'static,
    P: WebhookPoster + 'static,
{
    let config = state
        .config_store
        .read()
        .await
        .map_err(|e| ApiError(CoreError::Internal { message: e }))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(config)))
}

/// Handler for PUT /api/v1/configs/webhooks
///
/// Full replacement: the stored configuration becomes exactly the
/// normalized request, with omitted events disabled.
pub async fn update_webhook_config<S, M, E, C, P>(
    state: web::Data<AppState<S, M, E, C, P>>,
    request: web::Json<UpdateWebhookConfigRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: OtpStore + 'static,
    M: MessageChannel + 'static,
    E: EmailChannel + 'static,
    C: WebhookConfigStore + 'static,
    P: WebhookPoster + 'static,
{
    let config = WebhookConfig::from(request.into_inner());

    state
        .config_store
        .write(&config)
        .await
        .map_err(|e| ApiError(CoreError::Internal { message: e }))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(config).with_message("Webhook config saved.")))
}

/// Handler for POST /api/v1/configs/test
///
/// Logs and echoes whatever was posted. Pointing the webhook URL at this
/// endpoint lets operators watch envelopes arrive during setup.
pub async fn test_webhook(body: web::Json<Value>) -> Result<HttpResponse, ApiError> {
    info!(payload = %body, "Received webhook test payload");
    Ok(HttpResponse::Ok().json(ApiResponse::success(body.into_inner())))
}
