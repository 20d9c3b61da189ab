//! # Collaborator Ports
//!
//! Read-only chain access and the consensus engine, consumed by validation
//! and by the remote-work coordinator. Implementations live in adapter
//! modules of the subsystems (or in the node runtime).

use crate::entities::{Block, Header, H256};
use crate::errors::EngineError;
use crate::work::WorkPackage;

/// Read-only view of the local chain.
///
/// Implementations must be safe to query from several threads at once.
pub trait ChainView: Send + Sync {
    /// Returns true if the block with `hash` at `number` is stored and its
    /// post-state is available.
    fn has_block_and_state(&self, hash: H256, number: u64) -> bool;

    /// Returns true if the block with `hash` at `number` is stored.
    fn has_block(&self, hash: H256, number: u64) -> bool;

    /// Look up a stored header by hash.
    fn header(&self, hash: H256) -> Option<Header>;

    /// Uncles included by the stored block `hash`, if its body is known.
    fn uncles(&self, hash: H256) -> Option<Vec<Header>>;
}

/// Consensus engine checks used by validation and sealing.
pub trait ConsensusEngine: Send + Sync {
    /// Verify the uncle set of `block` against the chain.
    fn verify_uncles(&self, chain: &dyn ChainView, block: &Block) -> Result<(), EngineError>;

    /// Returns true if `nonce` solves `package`, whose seal hash is `pow_hash`.
    fn verify_nonce(&self, package: &WorkPackage, nonce: u64, pow_hash: H256) -> bool;
}
