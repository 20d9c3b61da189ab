//! # Node Container
//!
//! Holds the wired subsystem instances and owns their lifetime.
//!
//! ## Startup Order
//!
//! 1. Validate configuration
//! 2. Build genesis and seed the chain view
//! 3. Build the validator over the reference adapters
//! 4. Spawn the remote sealer and the block importer, push the first work

pub mod config;

pub use config::{ConfigError, NodeConfig};

use crate::genesis::GenesisBuilder;
use crate::wiring::{BlockImporter, NodeValidator, TemplateBuilder};
use ac_01_block_validation::{
    BlockValidator, BlockValidatorDependencies, InMemoryChain, KeccakHasher, KeccakPowEngine,
};
use ac_02_remote_work::{NoLocalMining, RemoteWorkCoordinator, RemoteWorkService};
use anyhow::Context;
use shared_types::Block;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// The running node.
pub struct NodeContainer {
    pub config: NodeConfig,
    pub chain: Arc<InMemoryChain>,
    pub engine: Arc<KeccakPowEngine>,
    pub validator: Arc<NodeValidator>,
    pub remote: RemoteWorkService<NoLocalMining>,
    genesis: Block,
    importer: Option<JoinHandle<()>>,
}

impl NodeContainer {
    /// Wire and start every subsystem. Must run inside a tokio runtime.
    pub async fn start(config: NodeConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid node configuration")?;

        let genesis = GenesisBuilder::new(config.genesis.clone())
            .build()
            .context("failed to build genesis block")?;
        let chain = Arc::new(InMemoryChain::with_genesis(genesis.header.clone()));

        let engine = Arc::new(KeccakPowEngine::new());
        let validator = Arc::new(BlockValidator::new(BlockValidatorDependencies {
            chain: Arc::clone(&chain),
            engine: Arc::clone(&engine),
            hasher: Arc::new(KeccakHasher::new()),
            config: config.validation.chain.clone(),
        }));

        let meter = Arc::new(NoLocalMining);
        let (remote, importer) = if config.remote_work.enabled {
            let (coordinator, sealed) =
                RemoteWorkCoordinator::spawn(config.remote_work.clone(), Arc::clone(&engine))
                    .context("failed to start remote sealer")?;

            let templates = TemplateBuilder::new(
                config.validation.gas_calculator(),
                config.validation.gas_bounds,
                config.coinbase,
            );
            let importer = BlockImporter::new(
                Arc::clone(&chain),
                Arc::clone(&validator),
                coordinator.clone(),
                templates,
            );
            importer
                .push_next(&genesis.header)
                .await
                .context("failed to push initial work")?;

            (
                RemoteWorkService::new(coordinator, meter),
                Some(tokio::spawn(importer.run(sealed))),
            )
        } else {
            (RemoteWorkService::disabled(meter), None)
        };

        info!(
            genesis_hash = ?genesis.hash(),
            gas_limit = genesis.gas_limit(),
            remote_work = config.remote_work.enabled,
            "Node started"
        );

        Ok(Self {
            config,
            chain,
            engine,
            validator,
            remote,
            genesis,
            importer,
        })
    }

    pub fn genesis(&self) -> &Block {
        &self.genesis
    }

    /// Stop the remote sealer and wait for the importer to drain.
    pub async fn shutdown(self) {
        if let Some(coordinator) = self.remote.coordinator() {
            coordinator.shutdown();
            coordinator.closed().await;
        }
        if let Some(importer) = self.importer {
            let _ = importer.await;
        }
        info!("Node stopped");
    }
}
