//! Driving ports (API offered to the RPC layer)

use crate::error::RemoteWorkError;
use async_trait::async_trait;
use shared_types::{WorkPackage, H256};

/// Remote mining API, transport-agnostic
///
/// Each call resolves within the configured timeout, also while the
/// coordinator is shutting down.
#[async_trait]
pub trait RemoteWorkApi: Send + Sync {
    /// Current work package for external solvers.
    async fn get_work(&self) -> Result<WorkPackage, RemoteWorkError>;

    /// Submit a solution. True only if it seals the current package.
    async fn submit_work(&self, nonce: u64, pow_hash: H256) -> bool;

    /// Report a solver's hashrate. True once the report is recorded.
    async fn submit_hashrate(&self, rate: u64, solver_id: H256) -> bool;

    /// Combined local and remote hashrate.
    async fn hashrate(&self) -> u64;
}
