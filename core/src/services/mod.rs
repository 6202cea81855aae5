//! Business services

pub mod otp;
pub mod webhook;

pub use otp::{
    mask_recipient, ChannelError, CreateOtp, EmailChannel, MessageChannel, OtpService,
    OtpServiceConfig, OtpStore, VerifyOtp,
};
pub use webhook::{WebhookConfigStore, WebhookDispatcher, WebhookPoster};
