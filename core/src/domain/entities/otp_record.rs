//! Pending-verification record for issued one-time codes.
//!
//! Only digests of the recipient and the code are ever stored; the record
//! never carries plaintext. The recipient digest doubles as the store key,
//! so a re-issuance for the same recipient overwrites the prior record.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Classification of a recipient identifier, selecting the delivery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetType {
    Email,
    Phone,
}

impl TargetType {
    /// Wire representation used in sort keys and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Email => "EMAIL",
            TargetType::Phone => "PHONE",
        }
    }

    /// Parse from the wire representation (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "EMAIL" => Some(TargetType::Email),
            "PHONE" => Some(TargetType::Phone),
            _ => None,
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic, non-reversible digest of a recipient identifier or code.
///
/// Fixed and non-keyed: the same input always produces the same digest, so
/// verification can recompute and compare without ever persisting plaintext.
pub fn digest(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generate a uniformly random numeric code with exactly `length` digits.
///
/// Drawn from `[10^(n-1), 10^n - 1]`, so the first digit is never zero and
/// the rendered string always has the requested width. `length` must be in
/// `1..=18`; callers validate before reaching here.
pub fn generate_code(length: u32) -> String {
    debug_assert!((1..=18).contains(&length));
    let low = 10u64.pow(length - 1);
    let high = 10u64.pow(length) - 1;
    OsRng.gen_range(low..=high).to_string()
}

/// Hard ceiling on a validity window (ten years, in seconds)
const MAX_VALIDITY_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// The unit of pending verification, keyed by the recipient digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Digest of the normalized recipient; doubles as the store key
    pub target_hash: String,

    /// Which delivery channel the code went through
    pub target_type: TargetType,

    /// Digest of the issued code
    pub code_hash: String,

    /// Timestamp of issuance
    pub created_at: DateTime<Utc>,

    /// Absolute expiry, independent of store-level TTL
    pub expires_at: DateTime<Utc>,

    /// Composite descriptor carried for downstream inspection only,
    /// never used for lookups
    #[serde(rename = "SK")]
    pub sort_key: String,
}

impl OtpRecord {
    /// Create a record for a freshly issued code.
    ///
    /// `validity_seconds` is the already-clamped window; `expires_at` is
    /// computed from it so the absolute check and the store TTL agree.
    pub fn new(
        recipient: &str,
        target_type: TargetType,
        code: &str,
        validity_seconds: u64,
    ) -> Self {
        let target_hash = digest(recipient);
        let created_at = Utc::now();
        // Windows past ten years are capped before the time arithmetic so
        // the cast can never wrap.
        let seconds = validity_seconds.min(MAX_VALIDITY_SECONDS) as i64;
        let expires_at = created_at + Duration::seconds(seconds);
        let sort_key = format!("target#{}#{}", target_type, target_hash);

        Self {
            target_hash,
            target_type,
            code_hash: digest(code),
            created_at,
            expires_at,
            sort_key,
        }
    }

    /// Whether the absolute expiry has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compare a submitted code against the stored digest
    pub fn matches_code(&self, code: &str) -> bool {
        self.code_hash == digest(code)
    }
}
