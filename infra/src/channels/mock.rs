//! Mock message channel for development and testing
//!
//! Logs deliveries instead of sending them and keeps a counter so tests
//! can assert on traffic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use og_core::services::{ChannelError, MessageChannel};
use og_core::services::mask_recipient;

#[derive(Clone)]
pub struct MockMessageChannel {
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
}

impl MockMessageChannel {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Mock that fails every delivery, for exercising error paths
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new()
        }
    }

    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMessageChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageChannel for MockMessageChannel {
    async fn send_text(&self, address: &str, text: &str) -> Result<(), ChannelError> {
        if self.simulate_failure {
            warn!(to = %mask_recipient(address), "Mock channel simulating delivery failure");
            return Err(ChannelError::Delivery("simulated failure".to_string()));
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            to = %mask_recipient(address),
            length = text.len(),
            total = count,
            "Mock channel accepted message"
        );
        Ok(())
    }
}
