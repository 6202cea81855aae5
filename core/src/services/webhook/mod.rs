//! Webhook event dispatcher
//!
//! Republishes the fixed catalogue of transport events to a single
//! configurable endpoint, gated per event type. Forwarding is advisory:
//! a failed delivery is logged and dropped, never retried and never
//! surfaced to the emitting transport.

mod dispatcher;
mod traits;

#[cfg(test)]
mod tests;

pub use dispatcher::WebhookDispatcher;
pub use traits::{WebhookConfigStore, WebhookPoster};
