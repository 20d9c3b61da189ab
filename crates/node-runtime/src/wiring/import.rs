//! Imports remotely sealed blocks and keeps solvers fed with fresh work.

use super::template::{seed_hash, TemplateBuilder};
use crate::genesis::builder::unix_now;
use ac_01_block_validation::{
    BlockValidationApi, BlockValidationError, BlockValidator, InMemoryChain, KeccakHasher,
    KeccakPowEngine, PostState, StateRootVariant,
};
use ac_02_remote_work::{RemoteWorkCoordinator, RemoteWorkError};
use shared_types::{Block, ChainView, Header, WorkPackage, H256};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// The validator wired with the reference adapters.
pub type NodeValidator = BlockValidator<InMemoryChain, KeccakPowEngine, KeccakHasher>;

/// Post-state of a block that executes nothing: the parent root under
/// every fork variant.
struct CarriedState(H256);

impl PostState for CarriedState {
    fn intermediate_root(&self, _variant: StateRootVariant) -> H256 {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("parent {0:?} is not in the chain")]
    MissingParent(H256),

    #[error(transparent)]
    Validation(#[from] BlockValidationError),
}

/// Consumes the coordinator's results channel.
pub struct BlockImporter {
    chain: Arc<InMemoryChain>,
    validator: Arc<NodeValidator>,
    coordinator: RemoteWorkCoordinator,
    templates: TemplateBuilder,
}

impl BlockImporter {
    pub fn new(
        chain: Arc<InMemoryChain>,
        validator: Arc<NodeValidator>,
        coordinator: RemoteWorkCoordinator,
        templates: TemplateBuilder,
    ) -> Self {
        Self {
            chain,
            validator,
            coordinator,
            templates,
        }
    }

    /// Validate a sealed block and insert it with its state.
    ///
    /// Local templates carry no transactions, so the expected execution
    /// output is zero gas, no receipts and the parent state root.
    pub fn import(&self, block: &Block) -> Result<H256, ImportError> {
        import_block(&self.chain, &self.validator, block)
    }

    /// Offer an empty child of `parent` to remote solvers.
    pub async fn push_next(&self, parent: &Header) -> Result<WorkPackage, RemoteWorkError> {
        let template = self.templates.empty_child(parent, unix_now());
        let seed = seed_hash(template.number());
        self.coordinator.push_work(template, seed).await
    }

    /// Import sealed blocks until the coordinator stops.
    pub async fn run(self, mut sealed: mpsc::Receiver<Block>) {
        while let Some(block) = sealed.recv().await {
            let number = block.number();
            let chain = Arc::clone(&self.chain);
            let validator = Arc::clone(&self.validator);
            // Validation fans out on rayon and must not hold an async worker.
            let imported = tokio::task::spawn_blocking(move || {
                let result = import_block(&chain, &validator, &block);
                (block, result)
            })
            .await;
            let (block, result) = match imported {
                Ok(pair) => pair,
                Err(err) => {
                    warn!(block_number = number, error = %err, "Import task failed");
                    continue;
                }
            };
            match result {
                Ok(hash) => {
                    info!(block_number = number, block_hash = ?hash, "Imported sealed block");
                    match self.push_next(&block.header).await {
                        Ok(_) => {}
                        Err(RemoteWorkError::EngineStopped) => break,
                        Err(err) => warn!(block_number = number, error = %err, "Failed to push next work"),
                    }
                }
                Err(err) => {
                    warn!(block_number = number, error = %err, "Rejected sealed block");
                }
            }
        }
        info!("Block importer stopped");
    }
}

fn import_block(
    chain: &InMemoryChain,
    validator: &NodeValidator,
    block: &Block,
) -> Result<H256, ImportError> {
    let parent = chain
        .header(block.parent_hash())
        .ok_or(ImportError::MissingParent(block.parent_hash()))?;

    validator.validate_body(block)?;
    validator.validate_state(block, &CarriedState(parent.state_root), &[], 0)?;

    Ok(chain.insert_block(block))
}
