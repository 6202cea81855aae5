//! HTTP middleware

pub mod auth;
pub mod cors;

pub use auth::BearerAuth;
pub use cors::create_cors;
