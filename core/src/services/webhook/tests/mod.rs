//! Unit tests for the webhook dispatcher

mod dispatcher_tests;
mod mocks;
