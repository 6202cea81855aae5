//! Transport event ingestion endpoint

use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::debug;

use og_core::domain::entities::webhook::WebhookEventType;
use og_core::errors::CoreError;
use og_core::services::{
    EmailChannel, MessageChannel, OtpStore, WebhookConfigStore, WebhookPoster,
};
use og_shared::types::response::ApiResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Handler for POST /api/v1/events/{event_type}
///
/// Accepts an emitted transport event by its wire name and hands it to
/// the dispatcher in the background; the caller never waits on webhook
/// delivery.
pub async fn emit_event<S, M, E, C, P>(
    state: web::Data<AppState<S, M, E, C, P>>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, ApiError>
where
    S: OtpStore + 'static,
    M: MessageChannel + 'static,
    E: EmailChannel + 'static,
    C: WebhookConfigStore + 'static,
    P: WebhookPoster + 'static,
{
    let raw = path.into_inner();
    let event_type = WebhookEventType::parse(&raw).ok_or_else(|| {
        ApiError(CoreError::Validation {
            message: format!("unknown event type: {}", raw),
        })
    })?;

    debug!(event_type = %event_type, "Accepted transport event");

    let dispatcher = state.dispatcher.clone();
    let payload = payload.into_inner();
    actix_web::rt::spawn(async move {
        dispatcher.dispatch(event_type, payload).await;
    });

    Ok(HttpResponse::Accepted().json(ApiResponse::<()>::message("Event accepted.")))
}
