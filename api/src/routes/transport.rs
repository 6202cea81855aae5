//! Transport session status endpoint

use actix_web::{web, HttpResponse};

use og_core::services::{
    EmailChannel, MessageChannel, OtpStore, WebhookConfigStore, WebhookPoster,
};
use og_shared::types::response::ApiResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// Handler for GET /api/v1/transport/status
pub async fn session_status<S, M, E, C, P>(
    state: web::Data<AppState<S, M, E, C, P>>,
) -> Result<HttpResponse, ApiError>
where
    S: OtpStore + 'static,
    M: MessageChannel + 'static,
    E: EmailChannel + 'static,
    C: WebhookConfigStore + 'static,
    P: WebhookPoster + 'static,
{
    let status = state.session.current();
    Ok(HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({ "status": status }))))
}
