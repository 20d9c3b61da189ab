//! # Work Packages
//!
//! The minimal snapshot an external solver needs to attempt a block's target.

use crate::entities::{Header, H256, U256};
use serde::{Deserialize, Serialize};

/// Proof-of-work algorithm tag advertised to solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PowAlgorithm {
    #[default]
    Keccak256,
    Sha256d,
}

impl PowAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowAlgorithm::Keccak256 => "keccak256",
            PowAlgorithm::Sha256d => "sha256d",
        }
    }
}

/// Immutable work snapshot. Superseded (and then stale) once a newer
/// package is pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPackage {
    /// Seal hash of the header being mined.
    pub pow_hash: H256,
    /// Seed hash for the PoW dataset (epoch marker).
    pub seed_hash: H256,
    /// Boundary a solution's digest must not exceed.
    pub target: U256,
    /// Number of the block being mined.
    pub number: u64,
    pub algorithm: PowAlgorithm,
}

impl WorkPackage {
    /// Build the package for an unsealed header.
    pub fn from_header(header: &Header, seed_hash: H256, algorithm: PowAlgorithm) -> Self {
        Self {
            pow_hash: header.seal_hash(),
            seed_hash,
            target: difficulty_to_target(header.difficulty),
            number: header.number,
            algorithm,
        }
    }

    /// RPC form: `[pow_hash, seed_hash, target, number, algorithm]`.
    pub fn to_rpc(&self) -> [String; 5] {
        let mut target = [0u8; 32];
        self.target.to_big_endian(&mut target);
        [
            format!("{:#x}", self.pow_hash),
            format!("{:#x}", self.seed_hash),
            format!("{:#x}", H256(target)),
            format!("{:#x}", self.number),
            self.algorithm.as_str().to_string(),
        ]
    }
}

/// `2^256 / difficulty`, saturating at `U256::MAX` for difficulty 0 or 1.
pub fn difficulty_to_target(difficulty: U256) -> U256 {
    if difficulty <= U256::one() {
        return U256::MAX;
    }
    // 2^256 = MAX + 1, so the quotient gains one exactly when MAX % d == d - 1.
    let quotient = U256::MAX / difficulty;
    if U256::MAX % difficulty == difficulty - U256::one() {
        quotient + U256::one()
    } else {
        quotient
    }
}
