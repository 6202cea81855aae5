//! OTP issuance and verification endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use og_core::services::{
    EmailChannel, MessageChannel, OtpStore, VerifyOtp, WebhookConfigStore, WebhookPoster,
};
use og_shared::types::response::ApiResponse;

use crate::dto::{CreateOtpRequest, VerifyOtpRequest};
use crate::error::{validation_error, ApiError};
use crate::state::AppState;

/// Handler for POST /api/v1/otp
///
/// Issues a one-time code and delivers it through the channel picked by
/// `target_type`. Success is a bare acknowledgment; the code itself is
/// never echoed.
pub async fn create_otp<S, M, E, C, P>(
    state: web::Data<AppState<S, M, E, C, P>>,
    request: web::Json<CreateOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: OtpStore + 'static,
    M: MessageChannel + 'static,
    E: EmailChannel + 'static,
    C: WebhookConfigStore + 'static,
    P: WebhookPoster + 'static,
{
    request.validate().map_err(|e| validation_error(&e))?;

    let core_request = request.into_inner().into_core().map_err(ApiError)?;
    state.otp_service.create(core_request).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("OTP sent.")))
}

/// Handler for POST /api/v1/otp/verify
///
/// Consumes the pending record win or lose; failures collapse to
/// `ERROR_OTP_INVALID`/`ERROR_OTP_EXPIRED` in the body with a 400 status.
pub async fn verify_otp<S, M, E, C, P>(
    state: web::Data<AppState<S, M, E, C, P>>,
    request: web::Json<VerifyOtpRequest>,
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
        .otp_service
        .verify(VerifyOtp::from(request.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("OTP Valid.")))
}
