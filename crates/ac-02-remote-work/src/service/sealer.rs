//! The sealer loop: sole owner of work, solutions and hashrate state.

use crate::config::RemoteWorkConfig;
use crate::domain::{HashrateTable, WorkBook};
use crate::error::{RemoteWorkError, SubmitOutcome};
use crate::metrics;
use shared_types::{Block, ConsensusEngine, WorkPackage, H256};
use std::sync::Arc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// A request to the loop. Each carries its own reply conduit.
#[derive(Debug)]
pub(crate) enum SealerRequest {
    PushWork {
        block: Block,
        seed_hash: H256,
        reply: oneshot::Sender<WorkPackage>,
    },
    FetchWork {
        reply: oneshot::Sender<Result<WorkPackage, RemoteWorkError>>,
    },
    SubmitWork {
        nonce: u64,
        pow_hash: H256,
        reply: oneshot::Sender<SubmitOutcome>,
    },
    SubmitHashrate {
        solver_id: H256,
        rate: u64,
        reply: oneshot::Sender<()>,
    },
    RemoteHashrate {
        reply: oneshot::Sender<u64>,
    },
}

pub(crate) struct SealerLoop<E: ConsensusEngine> {
    engine: Arc<E>,
    config: RemoteWorkConfig,
    book: WorkBook,
    rates: HashrateTable,
    requests: mpsc::Receiver<SealerRequest>,
    exit: watch::Receiver<bool>,
    results: mpsc::Sender<Block>,
}

impl<E: ConsensusEngine> SealerLoop<E> {
    pub(crate) fn new(
        engine: Arc<E>,
        config: RemoteWorkConfig,
        requests: mpsc::Receiver<SealerRequest>,
        exit: watch::Receiver<bool>,
        results: mpsc::Sender<Block>,
    ) -> Self {
        Self {
            engine,
            book: WorkBook::new(config.stale_history),
            rates: HashrateTable::new(),
            config,
            requests,
            exit,
            results,
        }
    }

    /// Serve requests one at a time until shutdown or until every handle
    /// is gone.
    pub(crate) async fn run(mut self) {
        let mut purge = tokio::time::interval(self.config.purge_interval());
        purge.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("Remote sealer started");
        loop {
            tokio::select! {
                // The watch guard must not outlive the branch.
                _ = async { let _ = self.exit.wait_for(|stopped| *stopped).await; } => break,
                request = self.requests.recv() => match request {
                    Some(request) => self.handle(request),
                    None => break,
                },
                _ = purge.tick() => self.purge_hashrates(),
            }
        }
        info!("Remote sealer stopped");
    }

    fn handle(&mut self, request: SealerRequest) {
        // A dropped reply receiver means the caller gave up; nothing to do.
        match request {
            SealerRequest::PushWork {
                block,
                seed_hash,
                reply,
            } => {
                let _ = reply.send(self.push_work(block, seed_hash));
            }
            SealerRequest::FetchWork { reply } => {
                let work = self.book.current().cloned().ok_or(RemoteWorkError::NoWork);
                let _ = reply.send(work);
            }
            SealerRequest::SubmitWork {
                nonce,
                pow_hash,
                reply,
            } => {
                let outcome = self.submit_work(nonce, pow_hash);
                metrics::record_submission(outcome.as_str());
                let _ = reply.send(outcome);
            }
            SealerRequest::SubmitHashrate {
                solver_id,
                rate,
                reply,
            } => {
                self.rates.submit(solver_id, rate, Instant::now());
                metrics::record_hashrate_report();
                let _ = reply.send(());
            }
            SealerRequest::RemoteHashrate { reply } => {
                let total = self
                    .rates
                    .total(Instant::now(), self.config.hashrate_expiry());
                let _ = reply.send(total);
            }
        }
    }

    fn push_work(&mut self, block: Block, seed_hash: H256) -> WorkPackage {
        let package = WorkPackage::from_header(&block.header, seed_hash, self.config.algorithm);
        debug!(
            block_number = package.number,
            pow_hash = ?package.pow_hash,
            "New remote work package"
        );
        self.book.push(package.clone(), block);
        metrics::record_work_pushed();
        package
    }

    fn submit_work(&mut self, nonce: u64, pow_hash: H256) -> SubmitOutcome {
        let pending = match self.book.open_for(pow_hash) {
            Ok(pending) => pending,
            Err(outcome) => {
                warn!(pow_hash = ?pow_hash, outcome = outcome.as_str(), "Remote work rejected");
                return outcome;
            }
        };
        if !self.engine.verify_nonce(&pending.package, nonce, pow_hash) {
            warn!(pow_hash = ?pow_hash, nonce, "Invalid proof-of-work submitted");
            return SubmitOutcome::InvalidNonce;
        }

        let mut header = pending.block.header.clone();
        header.nonce = nonce;
        let sealed = pending.block.clone().with_seal(header);
        let number = sealed.number();
        self.book.mark_sealed();

        debug!(block_number = number, pow_hash = ?pow_hash, nonce, "Remote solution accepted");
        match self.results.try_send(sealed) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(block_number = number, "Sealed block dropped, results channel full");
            }
            Err(TrySendError::Closed(_)) => {
                warn!(block_number = number, "Sealed block dropped, nobody reads results");
            }
        }
        SubmitOutcome::Accepted
    }

    fn purge_hashrates(&mut self) {
        let removed = self
            .rates
            .purge(Instant::now(), self.config.hashrate_expiry());
        if removed > 0 {
            debug!(removed, "Expired remote hashrate reports purged");
        }
    }
}
