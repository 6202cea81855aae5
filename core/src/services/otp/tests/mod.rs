//! Unit tests for the OTP engine

mod mocks;
