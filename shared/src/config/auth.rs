//! Static bearer-token authorization configuration

use serde::{Deserialize, Serialize};

/// Shared-secret authorization configuration
///
/// The gateway uses a single static bearer token; there is no per-user
/// credential system.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// The shared API token expected in the `Authorization` header
    pub api_token: String,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            api_token: std::env::var("API_TOKEN").unwrap_or_default(),
        }
    }

    /// Check a raw `Authorization` header value against the shared token
    ///
    /// Accepts the token with or without the `Bearer ` scheme prefix.
    /// An empty configured token rejects everything.
    pub fn validate_header(&self, header: &str) -> bool {
        if self.api_token.is_empty() {
            return false;
        }
        let presented = header.strip_prefix("Bearer ").unwrap_or(header);
        presented == self.api_token
    }
}
