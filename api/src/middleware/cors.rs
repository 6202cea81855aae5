//! CORS configuration

use actix_cors::Cors;
use actix_web::http::header;

/// Permissive CORS for a gateway that already requires a shared token
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600)
}
