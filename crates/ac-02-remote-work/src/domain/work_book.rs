//! Current work package and the superseded history used to classify
//! late submissions.

use crate::error::SubmitOutcome;
use shared_types::{Block, WorkPackage, H256};
use std::collections::VecDeque;

/// The package currently offered to solvers, with the block it seals.
#[derive(Debug, Clone)]
pub struct PendingWork {
    pub package: WorkPackage,
    pub block: Block,
    /// Set once a solution for this package has been accepted.
    pub sealed: bool,
}

#[derive(Debug)]
pub struct WorkBook {
    current: Option<PendingWork>,
    superseded: VecDeque<H256>,
    history_depth: usize,
}

impl WorkBook {
    pub fn new(history_depth: usize) -> Self {
        Self {
            current: None,
            superseded: VecDeque::with_capacity(history_depth),
            history_depth,
        }
    }

    /// Install a new package. The previous one (if different) becomes stale.
    /// Re-pushing the current package keeps its sealed flag.
    pub fn push(&mut self, package: WorkPackage, block: Block) {
        let mut sealed = false;
        if let Some(previous) = self.current.take() {
            if previous.package.pow_hash == package.pow_hash {
                sealed = previous.sealed;
            } else {
                self.superseded.push_back(previous.package.pow_hash);
            }
        }
        self.superseded.retain(|hash| *hash != package.pow_hash);
        while self.superseded.len() > self.history_depth {
            self.superseded.pop_front();
        }
        self.current = Some(PendingWork {
            package,
            block,
            sealed,
        });
    }

    pub fn current(&self) -> Option<&WorkPackage> {
        self.current.as_ref().map(|pending| &pending.package)
    }

    /// Find the open package a submission for `pow_hash` may seal, or the
    /// reason there is none.
    pub fn open_for(&self, pow_hash: H256) -> Result<&PendingWork, SubmitOutcome> {
        let Some(pending) = &self.current else {
            return Err(SubmitOutcome::NoWork);
        };
        if pending.package.pow_hash == pow_hash {
            return if pending.sealed {
                Err(SubmitOutcome::AlreadySealed)
            } else {
                Ok(pending)
            };
        }
        if self.superseded.contains(&pow_hash) {
            Err(SubmitOutcome::Stale)
        } else {
            Err(SubmitOutcome::UnknownWork)
        }
    }

    pub fn mark_sealed(&mut self) {
        if let Some(pending) = self.current.as_mut() {
            pending.sealed = true;
        }
    }

    pub fn superseded_len(&self) -> usize {
        self.superseded.len()
    }
}
