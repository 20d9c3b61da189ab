//! # Subsystem Wiring Module
//!
//! Connects the block validator and the remote sealer:
//!
//! ```text
//! TemplateBuilder ──push_work──→ RemoteWorkCoordinator ←── solvers
//!        ▲                               │
//!        │ next template                 │ sealed blocks
//!        │                               ▼
//!        └──────── BlockImporter ── validate_body / validate_state ──→ InMemoryChain
//! ```

pub mod import;
pub mod template;

pub use import::{BlockImporter, ImportError, NodeValidator};
pub use template::{seed_hash, TemplateBuilder, EPOCH_LENGTH};
