//! Direct message endpoint

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::errors::CoreError;
use og_core::services::{
    ChannelError, EmailChannel, MessageChannel, OtpStore, WebhookConfigStore, WebhookPoster,
};
use og_shared::types::response::ApiResponse;

use crate::dto::SendMessageRequest;
use crate::error::{validation_error, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/messages
///
/// Sends an arbitrary text through the transport session, bypassing the
/// OTP engine entirely.
pub async fn send_message<S, M, E, C, P>(
    state: web::Data<AppState<S, M, E, C, P>>,
    request: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: OtpStore + 'static,
    M: MessageChannel + 'static,
    E: EmailChannel + 'static,
    C: WebhookConfigStore + 'static,
    P: WebhookPoster + 'static,
{
    request.validate().map_err(|e| validation_error(&e))?;

    state
        .messages
        .send_text(&request.to, &request.text)
        .await
        .map_err(|e| match e {
            ChannelError::NoSession => ApiError(CoreError::NotFound {
                resource: "transport session".to_string(),
            }),
            ChannelError::Delivery(message) => ApiError(CoreError::Internal { message }),
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Message sent.")))
}
