//! Request and response DTOs

pub mod config;
pub mod message;
pub mod otp;

pub use config::UpdateWebhookConfigRequest;
pub use message::SendMessageRequest;
pub use otp::{CreateOtpRequest, VerifyOtpRequest};
