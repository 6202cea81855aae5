//! Transport session status holder
//!
//! The messaging transport runs as an external session whose availability
//! changes at runtime. Components that need the current status share one
//! `SessionState`; the component driving the transport updates it and the
//! message channel consults it before attempting delivery.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Lifecycle states of the external messaging session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Session is linked and able to deliver messages
    Online,
    /// Session is down or not yet started
    Offline,
    /// Session is up but waiting for the operator to link a device
    AwaitingLink,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Online => "ONLINE",
            SessionStatus::Offline => "OFFLINE",
            SessionStatus::AwaitingLink => "AWAITING_LINK",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cheaply cloneable handle to the current session status
#[derive(Clone)]
pub struct SessionState {
    inner: Arc<RwLock<SessionStatus>>,
}

impl SessionState {
    pub fn new(initial: SessionStatus) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn current(&self) -> SessionStatus {
        // A poisoned lock means a writer panicked mid-store of a Copy
        // value; the stored status is still valid.
        match self.inner.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set(&self, status: SessionStatus) {
        match self.inner.write() {
            Ok(mut guard) => *guard = status,
            Err(poisoned) => *poisoned.into_inner() = status,
        }
    }

    pub fn is_online(&self) -> bool {
        self.current() == SessionStatus::Online
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SessionStatus::Offline)
    }
}
