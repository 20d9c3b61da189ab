//! Ports (hexagonal architecture boundaries)
//!
//! - Inbound: the validation API offered to the block-import pipeline
//! - Outbound: hashing and post-state collaborators

pub mod inbound;
pub mod outbound;

pub use inbound::BlockValidationApi;
pub use outbound::{ChainHasher, PostState};
