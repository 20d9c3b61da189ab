//! # Genesis Block Builder
//!
//! Creates the genesis block the chain view is seeded with.

use std::time::{SystemTime, UNIX_EPOCH};

use ac_01_block_validation::GENESIS_GAS_LIMIT;
use serde::Deserialize;
use shared_types::{Block, Bloom, Header, EMPTY_LIST_HASH, H256, U256};
use thiserror::Error;

/// Longest extra-data payload accepted in a header.
pub const MAX_EXTRA_DATA: usize = 32;

/// Lowest difficulty a block may carry.
pub const MIN_DIFFICULTY: u64 = 131_072;

/// Genesis block creation errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Difficulty of zero has no proof-of-work target.
    #[error("Genesis difficulty must be non-zero")]
    ZeroDifficulty,

    /// Extra data longer than a header allows.
    #[error("Extra data is {len} bytes, limit is {MAX_EXTRA_DATA}")]
    ExtraDataTooLong { len: usize },

    /// Gas limit below the protocol floor.
    #[error("Genesis gas limit {0} is below the minimum")]
    GasLimitTooLow(u64),
}

/// Genesis block configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenesisConfig {
    /// Genesis timestamp (Unix seconds).
    /// If None, uses current time.
    pub timestamp: Option<u64>,

    /// Gas limit of the genesis block; children adjust from here.
    pub gas_limit: u64,

    /// Difficulty inherited by every locally built block.
    pub difficulty: U256,

    /// Root of the pre-allocated state.
    pub state_root: H256,

    /// Extra data (max 32 bytes).
    pub extra_data: Vec<u8>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            timestamp: None,
            gas_limit: GENESIS_GAS_LIMIT,
            difficulty: U256::from(MIN_DIFFICULTY),
            state_root: EMPTY_LIST_HASH,
            extra_data: b"Anvil-Chain Genesis".to_vec(),
        }
    }
}

impl GenesisConfig {
    /// Create a devnet configuration that a CPU solver can seal quickly.
    pub fn devnet() -> Self {
        Self {
            difficulty: U256::from(16),
            extra_data: b"Anvil-Chain Devnet".to_vec(),
            ..Default::default()
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.difficulty.is_zero() {
            return Err(GenesisError::ZeroDifficulty);
        }
        if self.extra_data.len() > MAX_EXTRA_DATA {
            return Err(GenesisError::ExtraDataTooLong {
                len: self.extra_data.len(),
            });
        }
        if self.gas_limit < ac_01_block_validation::MIN_GAS_LIMIT {
            return Err(GenesisError::GasLimitTooLow(self.gas_limit));
        }
        Ok(())
    }
}

/// Builder for creating genesis blocks.
pub struct GenesisBuilder {
    config: GenesisConfig,
}

impl GenesisBuilder {
    /// Create a new genesis builder with configuration.
    pub fn new(config: GenesisConfig) -> Self {
        Self { config }
    }

    /// Build the genesis block: height 0, zero parent, empty body.
    pub fn build(self) -> Result<Block, GenesisError> {
        self.config.validate()?;

        let timestamp = self.config.timestamp.unwrap_or_else(unix_now);

        let header = Header {
            parent_hash: H256::zero(),
            uncle_hash: EMPTY_LIST_HASH,
            state_root: self.config.state_root,
            transactions_root: EMPTY_LIST_HASH,
            receipts_root: EMPTY_LIST_HASH,
            logs_bloom: Bloom::zero(),
            difficulty: self.config.difficulty,
            number: 0,
            gas_limit: self.config.gas_limit,
            gas_used: 0,
            timestamp,
            extra_data: self.config.extra_data,
            ..Default::default()
        };

        Ok(Block::new(header, vec![], vec![]))
    }
}

/// Current Unix time in seconds; epoch if the clock is before it.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
