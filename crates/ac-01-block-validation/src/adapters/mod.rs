//! Adapters layer (Hexagonal Architecture)
//!
//! Reference implementations of the collaborator ports, used by the node
//! runtime and by tests.

mod keccak_hasher;
mod memory_chain;
mod pow_engine;

pub use keccak_hasher::*;
pub use memory_chain::*;
pub use pow_engine::*;
