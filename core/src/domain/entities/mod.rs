//! Domain entities

pub mod otp_record;
pub mod webhook;

pub use otp_record::{digest, generate_code, OtpRecord, TargetType};
pub use webhook::{
    WebhookConfig, WebhookEnvelope, WebhookEventSetting, WebhookEventType, EVENT_CATALOGUE,
};
