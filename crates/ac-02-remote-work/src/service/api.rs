//! RPC-facing facade over an optional coordinator.

use super::coordinator::RemoteWorkCoordinator;
use crate::error::RemoteWorkError;
use crate::ports::{HashrateMeter, RemoteWorkApi};
use async_trait::async_trait;
use shared_types::{WorkPackage, H256};
use std::sync::Arc;
use tracing::debug;

/// Remote-work service
///
/// Without a coordinator (remote mining disabled) work calls report
/// `Unsupported` or `false`, and the hashrate is the local rate alone.
pub struct RemoteWorkService<M: HashrateMeter> {
    remote: Option<RemoteWorkCoordinator>,
    meter: Arc<M>,
}

impl<M: HashrateMeter> RemoteWorkService<M> {
    pub fn new(remote: RemoteWorkCoordinator, meter: Arc<M>) -> Self {
        Self {
            remote: Some(remote),
            meter,
        }
    }

    pub fn disabled(meter: Arc<M>) -> Self {
        Self {
            remote: None,
            meter,
        }
    }

    pub fn coordinator(&self) -> Option<&RemoteWorkCoordinator> {
        self.remote.as_ref()
    }
}

#[async_trait]
impl<M: HashrateMeter> RemoteWorkApi for RemoteWorkService<M> {
    async fn get_work(&self) -> Result<WorkPackage, RemoteWorkError> {
        let remote = self.remote.as_ref().ok_or(RemoteWorkError::Unsupported)?;
        remote.get_work().await
    }

    async fn submit_work(&self, nonce: u64, pow_hash: H256) -> bool {
        let Some(remote) = &self.remote else {
            return false;
        };
        match remote.submit_work(nonce, pow_hash).await {
            Ok(outcome) => outcome.is_accepted(),
            Err(err) => {
                debug!(error = %err, "Work submission not delivered");
                false
            }
        }
    }

    async fn submit_hashrate(&self, rate: u64, solver_id: H256) -> bool {
        let Some(remote) = &self.remote else {
            return false;
        };
        remote.submit_hashrate(rate, solver_id).await.is_ok()
    }

    async fn hashrate(&self) -> u64 {
        let local = self.meter.local_hashrate();
        let remote = match &self.remote {
            Some(remote) => remote.remote_hashrate().await.unwrap_or(0),
            None => 0,
        };
        local.saturating_add(remote)
    }
}
