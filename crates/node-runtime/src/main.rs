//! # Anvil-Chain Node Runtime
//!
//! Entry point for the validation core node.
//!
//! ## Startup Sequence
//!
//! 1. Install logging (`AC_LOG_LEVEL`, default `info`)
//! 2. Load configuration (defaults + `AC_*` environment overrides)
//! 3. Start the node container (genesis, validator, remote sealer)
//! 4. Run until Ctrl+C, then shut the remote sealer down
//!
//! ## Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `AC_GAS_FLOOR` / `AC_GAS_CEIL` | Target gas-limit range |
//! | `AC_REMOTE_WORK` | Enable the remote sealer (`true`/`false`) |
//! | `AC_REQUEST_TIMEOUT_MS` | Per-request timeout of the sealer handle |
//! | `AC_EIP158_BLOCK` | Fork block for the empty-object state root, or `none` |
//! | `AC_CHAIN_ID` | Chain id |
//! | `AC_GENESIS_DIFFICULTY` | Difficulty of genesis and its descendants |
//! | `AC_COINBASE` | Hex address credited in block templates |

use anyhow::{Context, Result};
use node_runtime::{NodeConfig, NodeContainer};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_env("AC_LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = NodeConfig::from_env();
    info!(
        gas_floor = config.validation.gas_bounds.floor,
        gas_ceiling = config.validation.gas_bounds.ceiling,
        chain_id = config.validation.chain.chain_id,
        "Starting Anvil-Chain node"
    );

    let node = NodeContainer::start(config)
        .await
        .context("node failed to start")?;

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    node.shutdown().await;
    Ok(())
}
