//! Route handlers

pub mod configs;
pub mod events;
pub mod messages;
pub mod otp;
pub mod transport;
