//! Cloneable handle to the sealer loop.

use super::sealer::{SealerLoop, SealerRequest};
use crate::config::RemoteWorkConfig;
use crate::error::{ConfigError, RemoteWorkError, SubmitOutcome};
use shared_types::{Block, ConsensusEngine, WorkPackage, H256};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::info;

/// Handle to a running remote sealer.
///
/// Every round trip races the shutdown signal and is bounded by the
/// configured timeout, so callers never hang on a stopped coordinator.
#[derive(Clone, Debug)]
pub struct RemoteWorkCoordinator {
    requests: mpsc::Sender<SealerRequest>,
    exit_tx: Arc<watch::Sender<bool>>,
    exit_rx: watch::Receiver<bool>,
    timeout: Duration,
}

impl RemoteWorkCoordinator {
    /// Start the sealer loop on the current tokio runtime.
    ///
    /// Returns the handle and the stream of blocks sealed by remote solvers.
    pub fn spawn<E>(
        config: RemoteWorkConfig,
        engine: Arc<E>,
    ) -> Result<(Self, mpsc::Receiver<Block>), ConfigError>
    where
        E: ConsensusEngine + 'static,
    {
        config.validate()?;

        let (request_tx, request_rx) = mpsc::channel(config.request_buffer);
        let (results_tx, results_rx) = mpsc::channel(config.results_buffer);
        let (exit_tx, exit_rx) = watch::channel(false);

        let handle = Self {
            requests: request_tx,
            exit_tx: Arc::new(exit_tx),
            exit_rx: exit_rx.clone(),
            timeout: config.request_timeout(),
        };
        let sealer = SealerLoop::new(engine, config, request_rx, exit_rx, results_tx);
        tokio::spawn(sealer.run());

        Ok((handle, results_rx))
    }

    /// A handle whose requests go to `requests` instead of a spawned loop.
    #[cfg(test)]
    pub(super) fn detached(requests: mpsc::Sender<SealerRequest>, timeout: Duration) -> Self {
        let (exit_tx, exit_rx) = watch::channel(false);
        Self {
            requests,
            exit_tx: Arc::new(exit_tx),
            exit_rx,
            timeout,
        }
    }

    /// Offer a new block to remote solvers. The previous package becomes
    /// stale.
    pub async fn push_work(
        &self,
        block: Block,
        seed_hash: H256,
    ) -> Result<WorkPackage, RemoteWorkError> {
        self.request(|reply| SealerRequest::PushWork {
            block,
            seed_hash,
            reply,
        })
        .await
    }

    pub async fn get_work(&self) -> Result<WorkPackage, RemoteWorkError> {
        self.request(|reply| SealerRequest::FetchWork { reply })
            .await?
    }

    pub async fn submit_work(
        &self,
        nonce: u64,
        pow_hash: H256,
    ) -> Result<SubmitOutcome, RemoteWorkError> {
        self.request(|reply| SealerRequest::SubmitWork {
            nonce,
            pow_hash,
            reply,
        })
        .await
    }

    /// Resolves once the report is recorded.
    pub async fn submit_hashrate(&self, rate: u64, solver_id: H256) -> Result<(), RemoteWorkError> {
        self.request(|reply| SealerRequest::SubmitHashrate {
            solver_id,
            rate,
            reply,
        })
        .await
    }

    /// Sum of unexpired remote reports.
    pub async fn remote_hashrate(&self) -> Result<u64, RemoteWorkError> {
        self.request(|reply| SealerRequest::RemoteHashrate { reply })
            .await
    }

    /// Signal the loop to stop. Pending and future calls fail with
    /// `EngineStopped`.
    pub fn shutdown(&self) {
        if !self.exit_tx.send_replace(true) {
            info!("Remote sealer shutdown requested");
        }
    }

    pub fn is_stopped(&self) -> bool {
        *self.exit_rx.borrow()
    }

    /// Resolves once the loop has exited.
    pub async fn closed(&self) {
        self.requests.closed().await
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> SealerRequest,
    ) -> Result<T, RemoteWorkError> {
        if self.is_stopped() {
            return Err(RemoteWorkError::EngineStopped);
        }
        let (reply_tx, reply_rx) = oneshot::channel();
        match tokio::time::timeout(self.timeout, self.exchange(build(reply_tx), reply_rx)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteWorkError::Timeout),
        }
    }

    async fn exchange<T>(
        &self,
        request: SealerRequest,
        reply: oneshot::Receiver<T>,
    ) -> Result<T, RemoteWorkError> {
        let mut exit = self.exit_rx.clone();

        tokio::select! {
            sent = self.requests.send(request) => {
                if sent.is_err() {
                    return Err(RemoteWorkError::EngineStopped);
                }
            }
            _ = exit.wait_for(|stopped| *stopped) => return Err(RemoteWorkError::EngineStopped),
        }

        tokio::select! {
            result = reply => result.map_err(|_| RemoteWorkError::EngineStopped),
            _ = exit.wait_for(|stopped| *stopped) => Err(RemoteWorkError::EngineStopped),
        }
    }
}
