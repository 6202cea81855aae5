//! # OTP Gateway Core
//!
//! Core business logic for the OTP gateway: the issuance/verification
//! engine and the webhook event dispatcher, written against narrow traits
//! so storage, delivery channels, and the outbound HTTP client can be
//! swapped in tests and in the infrastructure layer.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
