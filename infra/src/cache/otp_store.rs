//! Redis-backed implementation of the verification record store
//!
//! Records are stored as JSON under `otp:{digest}` (plus any configured
//! global prefix). Only digests ever reach Redis key space or the logs;
//! plaintext recipients and codes never do.

use async_trait::async_trait;
use tracing::debug;

use og_core::domain::entities::otp_record::OtpRecord;
use og_core::services::OtpStore;
use og_shared::config::CacheConfig;

use crate::cache::RedisClient;

/// Key namespace for verification records
const OTP_KEY_PREFIX: &str = "otp";

pub struct RedisOtpStore {
    client: RedisClient,
    config: CacheConfig,
}

impl RedisOtpStore {
    pub fn new(client: RedisClient, config: CacheConfig) -> Self {
        Self { client, config }
    }

    fn record_key(&self, key: &str) -> String {
        self.config
            .make_key(&format!("{}:{}", OTP_KEY_PREFIX, key))
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn put(&self, key: &str, record: &OtpRecord, ttl_seconds: u64) -> Result<(), String> {
        let redis_key = self.record_key(key);
        let payload =
            serde_json::to_string(record).map_err(|e| format!("record serialization: {}", e))?;

        self.client
            .set_with_expiry(&redis_key, &payload, ttl_seconds)
            .await
            .map_err(|e| e.to_string())?;

        debug!(key = %redis_key, ttl = ttl_seconds, "Stored verification record");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<OtpRecord>, String> {
        let redis_key = self.record_key(key);
        let payload = self
            .client
            .get(&redis_key)
            .await
            .map_err(|e| e.to_string())?;

        match payload {
            Some(json) => {
                let record: OtpRecord = serde_json::from_str(&json)
                    .map_err(|e| format!("record deserialization: {}", e))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        let redis_key = self.record_key(key);
        self.client
            .delete(&redis_key)
            .await
            .map_err(|e| e.to_string())?;

        debug!(key = %redis_key, "Deleted verification record");
        Ok(())
    }
}
