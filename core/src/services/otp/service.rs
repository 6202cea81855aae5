//! OTP engine implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::otp_record::{digest, generate_code, OtpRecord, TargetType};
use crate::errors::{CoreError, CoreResult};

use super::config::OtpServiceConfig;
use super::email_template::render_otp_email;
use super::traits::{ChannelError, EmailChannel, MessageChannel, OtpStore};
use super::types::{CreateOtp, VerifyOtp};

/// Placeholder substituted with the generated code in phone content
const CODE_PLACEHOLDER: &str = "%code%";

/// The OTP issuance/verification engine
///
/// Stateless apart from its configuration; safe to share behind an `Arc`
/// and call concurrently. Same-recipient races resolve at the store's
/// per-key atomicity, which is all a single-use, per-recipient code needs.
pub struct OtpService<S: OtpStore, M: MessageChannel, E: EmailChannel> {
    store: Arc<S>,
    messages: Arc<M>,
    email: Arc<E>,
    config: OtpServiceConfig,
}

impl<S: OtpStore, M: MessageChannel, E: EmailChannel> OtpService<S, M, E> {
    pub fn new(store: Arc<S>, messages: Arc<M>, email: Arc<E>, config: OtpServiceConfig) -> Self {
        Self {
            store,
            messages,
            email,
            config,
        }
    }

    /// Issue a code: persist its hashed record and deliver it.
    ///
    /// Nothing about the code or the digests is ever echoed back; success
    /// is a bare acknowledgment.
    pub async fn create(&self, request: CreateOtp) -> CoreResult<()> {
        let recipient = request
            .normalized_recipient()
            .ok_or_else(|| CoreError::Validation {
                message: "recipient is required".to_string(),
            })?
            .to_string();

        let target_type = request
            .target_type
            .unwrap_or(self.config.default_target_type);

        let code_length = request
            .otp_length
            .unwrap_or(self.config.default_code_length);
        if !(4..=18).contains(&code_length) {
            return Err(CoreError::Validation {
                message: format!("otp_length must be between 4 and 18, got {}", code_length),
            });
        }

        // Clamp the validity window; the cap protects the store, it never
        // extends a shorter request.
        let expires_in = request
            .expires_in
            .unwrap_or(self.config.default_expires_in)
            .min(self.config.max_expires_in);
        if expires_in == 0 {
            return Err(CoreError::Validation {
                message: "expires_in must be greater than zero".to_string(),
            });
        }

        if self.config.is_testing_recipient(&recipient) {
            info!(
                target_type = %target_type,
                event = "otp_testing_bypass",
                "Testing recipient, skipping storage and delivery"
            );
            return Ok(());
        }

        let code = generate_code(code_length);
        let record = OtpRecord::new(&recipient, target_type, &code, expires_in);

        info!(
            target = %mask_recipient(&recipient),
            target_type = %target_type,
            expires_in = expires_in,
            event = "otp_generated",
            "Generated new one-time code"
        );

        // Store-level TTL mirrors the record's own window as a secondary
        // sweep; the record stays written even if delivery fails below.
        self.store
            .put(&record.target_hash, &record, expires_in)
            .await
            .map_err(|e| {
                warn!(error = %e, event = "otp_storage_failed", "Failed to store OTP record");
                CoreError::Internal {
                    message: format!("Failed to store OTP record: {}", e),
                }
            })?;

        match target_type {
            TargetType::Email => {
                let subject = format!("OTP - {}", self.config.company_name);
                let html = render_otp_email(&code, &self.config.company_name);
                self.email
                    .send(&recipient, &subject, &html)
                    .await
                    .map_err(map_channel_error)?;
            }
            TargetType::Phone => {
                let content = request
                    .content
                    .unwrap_or_else(|| self.config.default_content.clone());
                let text = content.replace(CODE_PLACEHOLDER, &code);
                self.messages
                    .send_text(&recipient, &text)
                    .await
                    .map_err(map_channel_error)?;
            }
        }

        info!(
            target = %mask_recipient(&recipient),
            target_type = %target_type,
            event = "otp_delivered",
            "One-time code dispatched"
        );

        Ok(())
    }

    /// Verify a submitted code against the pending record.
    ///
    /// The record is consumed on read, win or lose, so a second attempt
    /// against the same issuance always fails. Outcomes are collapsed to
    /// `OtpInvalid`/`OtpExpired` only; "never issued", "already consumed",
    /// and "wrong code" are indistinguishable by design.
    pub async fn verify(&self, request: VerifyOtp) -> CoreResult<()> {
        let recipient = request
            .normalized_recipient()
            .ok_or_else(|| CoreError::Validation {
                message: "recipient is required".to_string(),
            })?
            .to_string();

        if self.config.is_testing_recipient(&recipient)
            && self.config.is_testing_code(&request.code)
        {
            info!(event = "otp_testing_bypass", "Testing recipient/code pair accepted");
            return Ok(());
        }

        let target_hash = digest(&recipient);

        let record = self
            .store
            .get(&target_hash)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to read OTP record: {}", e),
            })?
            .ok_or_else(|| {
                debug!(event = "otp_verify_miss", "No live record for recipient");
                CoreError::OtpInvalid
            })?;

        // Consume before any check so retries can never probe a live record.
        self.store
            .delete(&target_hash)
            .await
            .map_err(|e| CoreError::Internal {
                message: format!("Failed to consume OTP record: {}", e),
            })?;

        if record.is_expired() {
            info!(event = "otp_verify_expired", "Code window lapsed before verification");
            return Err(CoreError::OtpExpired);
        }

        if !record.matches_code(&request.code) {
            info!(event = "otp_verify_mismatch", "Submitted code did not match");
            return Err(CoreError::OtpInvalid);
        }

        info!(event = "otp_verified", "One-time code accepted");
        Ok(())
    }
}

fn map_channel_error(error: ChannelError) -> CoreError {
    match error {
        ChannelError::NoSession => {
            warn!(event = "otp_delivery_no_session", "No transport session for delivery");
            CoreError::NotFound {
                resource: "transport session".to_string(),
            }
        }
        ChannelError::Delivery(message) => {
            warn!(error = %message, event = "otp_delivery_failed", "Delivery channel failure");
            CoreError::Internal { message }
        }
    }
}

/// Mask a recipient identifier for logging, keeping the last four characters
pub fn mask_recipient(recipient: &str) -> String {
    let char_count = recipient.chars().count();
    if char_count <= 4 {
        "****".to_string()
    } else {
        let tail: String = recipient.chars().skip(char_count - 4).collect();
        format!("***{}", tail)
    }
}
