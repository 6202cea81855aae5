//! In-memory mock implementations for OTP engine tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::otp_record::OtpRecord;
use crate::services::otp::traits::{ChannelError, EmailChannel, MessageChannel, OtpStore};

/// In-memory TTL store; TTL is recorded, not enforced
pub struct MockStore {
    pub records: Mutex<HashMap<String, (OtpRecord, u64)>>,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
    pub should_fail: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn stored_ttl(&self, key: &str) -> Option<u64> {
        self.records.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Seed a record directly, bypassing the engine
    pub fn insert(&self, record: OtpRecord, ttl: u64) {
        self.records
            .lock()
            .unwrap()
            .insert(record.target_hash.clone(), (record, ttl));
    }
}

#[async_trait]
impl OtpStore for MockStore {
    async fn put(&self, key: &str, record: &OtpRecord, ttl_seconds: u64) -> Result<(), String> {
        if self.should_fail {
            return Err("store error".to_string());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), (record.clone(), ttl_seconds));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<OtpRecord>, String> {
        if self.should_fail {
            return Err("store error".to_string());
        }
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(key)
            .map(|(record, _)| record.clone()))
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("store error".to_string());
        }
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Recording message channel with configurable failure modes
pub struct MockMessages {
    pub sent: Mutex<Vec<(String, String)>>,
    pub failure: Option<fn() -> ChannelError>,
}

impl MockMessages {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            failure: Some(|| ChannelError::Delivery("provider rejected message".to_string())),
            ..Self::new()
        }
    }

    pub fn offline() -> Self {
        Self {
            failure: Some(|| ChannelError::NoSession),
            ..Self::new()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_text(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, text)| text.clone())
    }
}

#[async_trait]
impl MessageChannel for MockMessages {
    async fn send_text(&self, address: &str, text: &str) -> Result<(), ChannelError> {
        if let Some(make_error) = self.failure {
            return Err(make_error());
        }
        self.sent
            .lock()
            .unwrap()
            .push((address.to_string(), text.to_string()));
        Ok(())
    }
}

/// Recording email channel
pub struct MockEmail {
    pub sent: Mutex<Vec<(String, String, String)>>,
    pub should_fail: bool,
}

impl MockEmail {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<(String, String, String)> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailChannel for MockEmail {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), ChannelError> {
        if self.should_fail {
            return Err(ChannelError::Delivery("smtp relay refused".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), html.to_string()));
        Ok(())
    }
}
