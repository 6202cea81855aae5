//! Shared view of the external messaging transport session

pub mod session;

pub use session::{SessionState, SessionStatus};
