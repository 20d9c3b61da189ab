//! # Genesis Module
//!
//! The genesis block is the root every imported block descends from:
//!
//! - Height: 0
//! - Parent hash: 32 zero bytes
//! - Uncle, transaction and receipt roots: empty-list root
//! - Gas limit: the protocol genesis gas limit unless configured

pub mod builder;

pub use builder::{GenesisBuilder, GenesisConfig, GenesisError};
