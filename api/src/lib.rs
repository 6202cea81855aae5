//! # OTP Gateway API
//!
//! The HTTP surface of the gateway: request/response DTOs, static
//! bearer-token middleware, and the route handlers that drive the core
//! services. All handlers are generic over the core traits so the
//! integration tests run against in-memory implementations.

pub mod app;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use error::ApiError;
pub use state::AppState;
