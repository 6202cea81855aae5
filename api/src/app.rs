//! Application factory
//!
//! Builds the actix `App` from shared state. The `/api/v1` scope sits
//! behind the static bearer token; only `/health` is open.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use og_core::services::{
    EmailChannel, MessageChannel, OtpStore, WebhookConfigStore, WebhookPoster,
};
use og_shared::types::response::ApiResponse;

use crate::middleware::{create_cors, BearerAuth};
use crate::routes;
use crate::state::AppState;

pub fn create_app<S, M, E, C, P>(
    state: web::Data<AppState<S, M, E, C, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: OtpStore + 'static,
    M: MessageChannel + 'static,
    E: EmailChannel + 'static,
    C: WebhookConfigStore + 'static,
    P: WebhookPoster + 'static,
{
    let auth = BearerAuth::new(state.auth.clone());

    App::new()
        .app_data(state)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .wrap(auth)
                .route("/otp", web::post().to(routes::otp::create_otp::<S, M, E, C, P>))
                .route(
                    "/otp/verify",
                    web::post().to(routes::otp::verify_otp::<S, M, E, C, P>),
                )
                .route(
                    "/configs/webhooks",
                    web::get().to(routes::configs::get_webhook_config::<S, M, E, C, P>),
                )
                .route(
                    "/configs/webhooks",
                    web::put().to(routes::configs::update_webhook_config::<S, M, E, C, P>),
                )
                .route("/configs/test", web::post().to(routes::configs::test_webhook))
                .route(
                    "/events/{event_type}",
                    web::post().to(routes::events::emit_event::<S, M, E, C, P>),
                )
                .route(
                    "/transport/status",
                    web::get().to(routes::transport::session_status::<S, M, E, C, P>),
                )
                .route(
                    "/messages",
                    web::post().to(routes::messages::send_message::<S, M, E, C, P>),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "NOT_FOUND_ERROR",
        "The requested resource was not found",
    ))
}
