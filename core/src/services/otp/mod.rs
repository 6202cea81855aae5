//! OTP issuance and verification engine
//!
//! The engine owns the security-critical discipline: digests only in
//! storage, TTL clamping, exactly-once consumption, and enumeration-safe
//! error shaping. Storage and delivery are reached through traits so the
//! infrastructure layer and tests can substitute their own.

mod config;
mod email_template;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use email_template::render_otp_email;
pub use service::{mask_recipient, OtpService};
pub use traits::{ChannelError, EmailChannel, MessageChannel, OtpStore};
pub use types::{CreateOtp, VerifyOtp};
