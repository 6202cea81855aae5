//! Delivery channel implementations

pub mod email;
pub mod gateway;
pub mod mock;

pub use email::SmtpEmailChannel;
pub use gateway::GatewayMessageChannel;
pub use mock::MockMessageChannel;
