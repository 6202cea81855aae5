//! # OTP Gateway Shared
//!
//! Configuration loading and common API types shared across the
//! gateway's core, infrastructure, and API crates.

pub mod config;
pub mod types;
