//! Webhook relay plumbing: configuration persistence and outbound delivery

pub mod config_store;
pub mod http_poster;

pub use config_store::FileWebhookConfigStore;
pub use http_poster::ReqwestWebhookPoster;
