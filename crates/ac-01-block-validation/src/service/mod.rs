//! Block Validator - Core business logic
//!
//! # Architecture
//! - Each validation stage is a fixed set of independent, read-only checks
//! - Checks run on the rayon pool; the first observed failure wins
//! - Success is only reported after every check has finished

use crate::domain::ChainConfig;
use crate::error::{BlockValidationError, ValidationResult};
use crate::metrics;
use crate::ports::{BlockValidationApi, ChainHasher, PostState};
use rayon::prelude::*;
use rlp::Encodable;
use shared_types::{Block, ChainView, ConsensusEngine, Receipt, H256};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};


const STAGE_BODY: &str = "body";
const STAGE_STATE: &str = "state";

/// One independent check within a validation stage.
type Check<'a> = Box<dyn FnOnce() -> ValidationResult<()> + Send + 'a>;

/// Run all checks concurrently and return the first failure observed.
///
/// Which failure wins is unspecified when several checks fail.
fn first_failure(checks: Vec<Check<'_>>) -> ValidationResult<()> {
    match checks.into_par_iter().map(|check| check()).find_map_any(Result::err) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn encode_all<T: Encodable>(items: &[T]) -> Vec<Vec<u8>> {
    items.iter().map(|item| rlp::encode(item).to_vec()).collect()
}

/// Dependencies for BlockValidator
pub struct BlockValidatorDependencies<C, E, H> {
    pub chain: Arc<C>,
    pub engine: Arc<E>,
    pub hasher: Arc<H>,
    pub config: ChainConfig,
}

/// Block Validator
///
/// Stateless apart from its read-only collaborators, so one instance can
/// serve any number of threads.
pub struct BlockValidator<C, E, H>
where
    C: ChainView,
    E: ConsensusEngine,
    H: ChainHasher,
{
    chain: Arc<C>,
    engine: Arc<E>,
    hasher: Arc<H>,
    config: ChainConfig,
}

impl<C, E, H> BlockValidator<C, E, H>
where
    C: ChainView,
    E: ConsensusEngine,
    H: ChainHasher,
{
    pub fn new(deps: BlockValidatorDependencies<C, E, H>) -> Self {
        Self {
            chain: deps.chain,
            engine: deps.engine,
            hasher: deps.hasher,
            config: deps.config,
        }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    // === BODY CHECKS ===

    fn check_not_known(&self, hash: H256, number: u64) -> ValidationResult<()> {
        if self.chain.has_block_and_state(hash, number) {
            return Err(BlockValidationError::KnownBlock { number, hash });
        }
        Ok(())
    }

    fn check_uncles(&self, block: &Block) -> ValidationResult<()> {
        self.engine.verify_uncles(self.chain.as_ref(), block)?;

        let have = self.hasher.merkle_root(&encode_all(&block.uncles));
        let want = block.header.uncle_hash;
        if have != want {
            return Err(BlockValidationError::UncleRootMismatch { have, want });
        }
        Ok(())
    }

    fn check_transactions_root(&self, block: &Block) -> ValidationResult<()> {
        let have = self.hasher.merkle_root(&encode_all(&block.transactions));
        let want = block.header.transactions_root;
        if have != want {
            return Err(BlockValidationError::TxRootMismatch { have, want });
        }
        Ok(())
    }

    fn check_ancestor(&self, block: &Block) -> ValidationResult<()> {
        let parent = block.parent_hash();
        let number = block.number();
        // A block at height 0 has no ancestor to link to.
        let Some(parent_number) = number.checked_sub(1) else {
            return Err(BlockValidationError::UnknownAncestor { parent, number });
        };

        if self.chain.has_block_and_state(parent, parent_number) {
            return Ok(());
        }
        if self.chain.has_block(parent, parent_number) {
            Err(BlockValidationError::PrunedAncestor { parent, number })
        } else {
            Err(BlockValidationError::UnknownAncestor { parent, number })
        }
    }

    // === STATE CHECKS ===

    fn check_bloom(&self, block: &Block, receipts: &[Receipt]) -> ValidationResult<()> {
        let local = self.hasher.create_bloom(receipts);
        let remote = block.header.logs_bloom;
        if local != remote {
            return Err(BlockValidationError::BloomMismatch {
                remote: Box::new(remote),
                local: Box::new(local),
            });
        }
        Ok(())
    }

    fn check_receipts_root(&self, block: &Block, receipts: &[Receipt]) -> ValidationResult<()> {
        let local = self.hasher.merkle_root(&encode_all(receipts));
        let remote = block.header.receipts_root;
        if local != remote {
            return Err(BlockValidationError::ReceiptRootMismatch { remote, local });
        }
        Ok(())
    }

    fn check_state_root(&self, block: &Block, state: &dyn PostState) -> ValidationResult<()> {
        let variant = self.config.state_root_variant(block.number());
        let local = state.intermediate_root(variant);
        let remote = block.header.state_root;
        if local != remote {
            return Err(BlockValidationError::StateRootMismatch { remote, local });
        }
        Ok(())
    }

    fn observe(&self, stage: &'static str, block: &Block, result: &ValidationResult<()>, started: Instant) {
        metrics::record_validation_latency(stage, started.elapsed().as_secs_f64());
        match result {
            Ok(()) => {
                debug!(
                    stage,
                    block_number = block.number(),
                    block_hash = ?block.hash(),
                    "Block passed validation"
                );
                metrics::record_block_validated(stage);
            }
            Err(err @ BlockValidationError::KnownBlock { .. }) => {
                debug!(stage, block_number = block.number(), "{}", err);
            }
            Err(err) => {
                warn!(
                    stage,
                    block_number = block.number(),
                    block_hash = ?block.hash(),
                    reason = err.reason(),
                    recoverable = err.is_recoverable(),
                    "Block rejected: {}",
                    err
                );
                metrics::record_block_rejected(err.reason());
            }
        }
    }
}

impl<C, E, H> BlockValidationApi for BlockValidator<C, E, H>
where
    C: ChainView,
    E: ConsensusEngine,
    H: ChainHasher,
{
    fn validate_body(&self, block: &Block) -> ValidationResult<()> {
        let started = Instant::now();
        let hash = block.hash();
        let number = block.number();

        // Cheap short-circuit before fanning out.
        let result = self.check_not_known(hash, number).and_then(|()| {
            let checks: Vec<Check<'_>> = vec![
                Box::new(move || self.check_not_known(hash, number)),
                Box::new(move || self.check_uncles(block)),
                Box::new(move || self.check_transactions_root(block)),
                Box::new(move || self.check_ancestor(block)),
            ];
            first_failure(checks)
        });

        self.observe(STAGE_BODY, block, &result, started);
        result
    }

    fn validate_state(
        &self,
        block: &Block,
        state: &dyn PostState,
        receipts: &[Receipt],
        used_gas: u64,
    ) -> ValidationResult<()> {
        let started = Instant::now();

        let result = if block.gas_used() != used_gas {
            Err(BlockValidationError::GasUsedMismatch {
                remote: block.gas_used(),
                local: used_gas,
            })
        } else {
            let checks: Vec<Check<'_>> = vec![
                Box::new(move || self.check_bloom(block, receipts)),
                Box::new(move || self.check_receipts_root(block, receipts)),
                Box::new(move || self.check_state_root(block, state)),
            ];
            first_failure(checks)
        };

        self.observe(STAGE_STATE, block, &result, started);
        result
    }
}
