//! Keccak proof-of-work engine adapter
//!
//! Implements the ConsensusEngine port: uncle rules plus a Keccak nonce
//! check (`keccak256(pow_hash || nonce_be) <= target`).

use shared_types::hashing::keccak256_concat;
use shared_types::{Block, ChainView, ConsensusEngine, EngineError, Header, WorkPackage, H256, U256};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Maximum uncles per block.
pub const MAX_UNCLES: usize = 2;

/// How many generations back an uncle may branch off.
pub const MAX_UNCLE_DEPTH: u64 = 7;

/// Reference PoW engine
#[derive(Debug, Clone, Copy, Default)]
pub struct KeccakPowEngine;

impl KeccakPowEngine {
    pub fn new() -> Self {
        Self
    }

    /// Digest a nonce is judged by.
    pub fn pow_digest(pow_hash: H256, nonce: u64) -> H256 {
        keccak256_concat(&[pow_hash.as_bytes(), &nonce.to_be_bytes()])
    }

    /// Search `rounds` nonces starting at `start` for one meeting the
    /// package's target.
    pub fn solve(&self, package: &WorkPackage, start: u64, rounds: u64) -> Option<u64> {
        (0..rounds)
            .map(|i| start.wrapping_add(i))
            .find(|nonce| self.verify_nonce(package, *nonce, package.pow_hash))
    }

    /// Ancestors of `block` up to `MAX_UNCLE_DEPTH` generations, plus the
    /// block itself, and the hashes of every uncle those ancestors include.
    fn ancestry(chain: &dyn ChainView, block: &Block) -> (HashMap<H256, Header>, HashSet<H256>) {
        let mut ancestors = HashMap::new();
        let mut included = HashSet::new();
        let mut cursor = block.parent_hash();
        for _ in 0..MAX_UNCLE_DEPTH {
            let Some(header) = chain.header(cursor) else {
                break;
            };
            included.extend(chain.uncles(cursor).unwrap_or_default().iter().map(Header::hash));
            let next = header.parent_hash;
            let genesis = header.is_genesis();
            ancestors.insert(cursor, header);
            if genesis {
                break;
            }
            cursor = next;
        }
        ancestors.insert(block.hash(), block.header.clone());
        (ancestors, included)
    }
}

impl ConsensusEngine for KeccakPowEngine {
    fn verify_uncles(&self, chain: &dyn ChainView, block: &Block) -> Result<(), EngineError> {
        if block.uncles.len() > MAX_UNCLES {
            return Err(EngineError::TooManyUncles {
                count: block.uncles.len(),
                max: MAX_UNCLES,
            });
        }
        if block.uncles.is_empty() {
            return Ok(());
        }

        // Uncles already included by an ancestor count as duplicates.
        let (ancestors, mut seen) = Self::ancestry(chain, block);

        for uncle in &block.uncles {
            let hash = uncle.hash();
            if !seen.insert(hash) {
                return Err(EngineError::DuplicateUncle(hash));
            }
            if ancestors.contains_key(&hash) {
                return Err(EngineError::UncleIsAncestor(hash));
            }

            // The uncle must branch off a known ancestor other than the parent.
            let Some(uncle_parent) = ancestors.get(&uncle.parent_hash) else {
                return Err(EngineError::DanglingUncle(hash));
            };
            if uncle.parent_hash == block.parent_hash() {
                return Err(EngineError::DanglingUncle(hash));
            }

            let in_window = uncle.number < block.number()
                && block.number() - uncle.number <= MAX_UNCLE_DEPTH
                && uncle_parent.number.checked_add(1) == Some(uncle.number);
            if !in_window {
                return Err(EngineError::InvalidUncleNumber {
                    uncle: uncle.number,
                    block: block.number(),
                });
            }
        }

        trace!(block_number = block.number(), uncles = block.uncles.len(), "Uncles verified");
        Ok(())
    }

    fn verify_nonce(&self, package: &WorkPackage, nonce: u64, pow_hash: H256) -> bool {
        if pow_hash != package.pow_hash {
            return false;
        }
        let digest = Self::pow_digest(pow_hash, nonce);
        U256::from_big_endian(digest.as_bytes()) <= package.target
    }
}
