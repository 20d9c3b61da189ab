//! Ports (hexagonal architecture boundaries)

pub mod inbound;
pub mod outbound;

pub use inbound::RemoteWorkApi;
pub use outbound::HashrateMeter;
