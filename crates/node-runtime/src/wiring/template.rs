//! Block templates offered to remote solvers.

use ac_01_block_validation::{GasBounds, GasLimitCalculator};
use shared_types::{keccak256, Address, Block, Bloom, Header, EMPTY_LIST_HASH, H256};

/// Blocks per seed epoch.
pub const EPOCH_LENGTH: u64 = 30_000;

/// Seed hash for the epoch containing `number`: Keccak applied once per
/// elapsed epoch, starting from zero.
pub fn seed_hash(number: u64) -> H256 {
    (0..number / EPOCH_LENGTH).fold(H256::zero(), |seed, _| keccak256(seed.as_bytes()))
}

/// Builds empty child blocks on top of the current head.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    calculator: GasLimitCalculator,
    bounds: GasBounds,
    coinbase: Address,
    extra_data: Vec<u8>,
}

impl TemplateBuilder {
    pub fn new(calculator: GasLimitCalculator, bounds: GasBounds, coinbase: Address) -> Self {
        Self {
            calculator,
            bounds,
            coinbase,
            extra_data: Vec::new(),
        }
    }

    pub fn with_extra_data(mut self, extra_data: Vec<u8>) -> Self {
        self.extra_data = extra_data;
        self
    }

    /// An unsealed child of `parent` with no transactions or uncles.
    ///
    /// Executing nothing leaves the parent state untouched, so the state
    /// root is carried over and every body root is the empty-list root.
    pub fn empty_child(&self, parent: &Header, now: u64) -> Block {
        let header = Header {
            parent_hash: parent.hash(),
            uncle_hash: EMPTY_LIST_HASH,
            coinbase: self.coinbase,
            state_root: parent.state_root,
            transactions_root: EMPTY_LIST_HASH,
            receipts_root: EMPTY_LIST_HASH,
            logs_bloom: Bloom::zero(),
            difficulty: parent.difficulty,
            number: parent.number + 1,
            gas_limit: self.calculator.for_parent(parent, self.bounds),
            gas_used: 0,
            timestamp: now.max(parent.timestamp + 1),
            extra_data: self.extra_data.clone(),
            mix_digest: H256::zero(),
            nonce: 0,
        };
        Block::new(header, vec![], vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::U256;

    fn builder() -> TemplateBuilder {
        TemplateBuilder::new(
            GasLimitCalculator::default(),
            GasBounds::new(8_000_000, 12_000_000),
            Address::repeat_byte(0xcb),
        )
    }

    #[test]
    fn test_child_links_to_parent() {
        let parent = Header {
            number: 4,
            gas_limit: 10_000_000,
            difficulty: U256::from(500),
            timestamp: 100,
            state_root: H256::repeat_byte(7),
            ..Default::default()
        };
        let child = builder().empty_child(&parent, 150);

        assert_eq!(child.parent_hash(), parent.hash());
        assert_eq!(child.number(), 5);
        assert_eq!(child.header.state_root, parent.state_root);
        assert_eq!(child.header.difficulty, parent.difficulty);
        assert_eq!(child.header.coinbase, Address::repeat_byte(0xcb));
        assert_eq!(child.header.timestamp, 150);
    }

    #[test]
    fn test_child_gas_limit_moves_toward_bounds() {
        let parent = Header {
            gas_limit: 5_000_000,
            ..Default::default()
        };
        let child = builder().empty_child(&parent, 0);
        assert!(child.gas_limit() > parent.gas_limit);
    }

    #[test]
    fn test_timestamp_strictly_increases() {
        let parent = Header {
            timestamp: 1_000,
            ..Default::default()
        };
        assert_eq!(builder().empty_child(&parent, 900).header.timestamp, 1_001);
    }

    #[test]
    fn test_seed_hash_per_epoch() {
        assert_eq!(seed_hash(0), H256::zero());
        assert_eq!(seed_hash(EPOCH_LENGTH - 1), H256::zero());
        assert_eq!(seed_hash(EPOCH_LENGTH), keccak256(H256::zero().as_bytes()));
        assert_ne!(seed_hash(2 * EPOCH_LENGTH), seed_hash(EPOCH_LENGTH));
    }
}
