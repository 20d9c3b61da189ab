//! # ac-02-remote-work
//!
//! Remote proof-of-work coordinator.
//!
//! ## Architecture
//!
//! External solvers poll for work, grind nonces and submit solutions. The
//! work package, accepted solutions and the hashrate table belong to a
//! single task, the sealer loop. Callers never touch that state; they send
//! a request carrying a one-shot reply channel and await the answer.
//!
//! ```text
//! RPC ──→ RemoteWorkService ──→ RemoteWorkCoordinator ──mpsc──→ SealerLoop
//!                                      ↑                           │
//!                                      └────────── oneshot ────────┘
//!                                                                  │
//!                                                   sealed blocks ─┴─→ importer
//! ```
//!
//! Every wait races the shutdown signal and is bounded by a timeout.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (coordinator, mut sealed) = RemoteWorkCoordinator::spawn(config, engine)?;
//! coordinator.push_work(block, seed_hash).await?;
//!
//! let service = RemoteWorkService::new(coordinator.clone(), Arc::new(NoLocalMining));
//! let work = service.get_work().await?;
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use config::RemoteWorkConfig;
pub use error::{ConfigError, RemoteWorkError, SubmitOutcome};
pub use ports::{HashrateMeter, RemoteWorkApi};
pub use ports::outbound::NoLocalMining;
pub use service::{RemoteWorkCoordinator, RemoteWorkService};
