//! # Shared Types Crate
//!
//! This crate contains the chain entities and the collaborator ports shared
//! by the validation subsystem (ac-01) and the remote-work subsystem (ac-02).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Headers, blocks, receipts and work packages
//!   are defined here and nowhere else.
//! - **Narrow Ports**: Storage and the consensus engine are consumed through
//!   the [`ChainView`] and [`ConsensusEngine`] traits only.
//! - **Canonical Encoding**: Every hashed entity has exactly one RLP encoding,
//!   so roots and hashes are reproducible across nodes.

pub mod bloom;
pub mod chain;
pub mod entities;
pub mod errors;
pub mod hashing;
pub mod work;

pub use bloom::{Bloom, BLOOM_BYTES};
pub use chain::{ChainView, ConsensusEngine};
pub use entities::*;
pub use errors::EngineError;
pub use hashing::{keccak256, EMPTY_LIST_HASH};
pub use work::{PowAlgorithm, WorkPackage};
