//! Notification gateway composition.

mod gateway;

pub use gateway::ChannelGateway;
