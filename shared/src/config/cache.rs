//! TTL record store (Redis) configuration module

use serde::{Deserialize, Serialize};

/// Upper bound on any stored record's validity window: 7 days in seconds.
/// Caller-requested windows are clamped to this, never extended by it.
pub const MAX_RECORD_TTL_SECONDS: u64 = 604_800;

/// Redis-backed TTL store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Optional prefix applied to every key
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Hard cap on per-record TTL in seconds
    #[serde(default = "default_max_record_ttl")]
    pub max_record_ttl: u64,
}

fn default_max_record_ttl() -> u64 {
    MAX_RECORD_TTL_SECONDS
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            key_prefix: None,
            max_record_ttl: MAX_RECORD_TTL_SECONDS,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let max_record_ttl = std::env::var("REDIS_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(MAX_RECORD_TTL_SECONDS);

        Self {
            url,
            key_prefix: std::env::var("REDIS_KEY_PREFIX").ok(),
            max_record_ttl,
        }
    }

    /// Generate a store key with the configured prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}
