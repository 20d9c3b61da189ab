//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! ## Modules
//!
//! - `container`: configuration and the wired subsystem set
//! - `genesis`: genesis block construction
//! - `wiring`: block templates and the sealed-block importer

#![warn(missing_docs)]
#![allow(missing_docs)]
#![allow(clippy::type_complexity)]

pub mod container;
pub mod genesis;
pub mod wiring;

pub use container::{ConfigError, NodeConfig, NodeContainer};
