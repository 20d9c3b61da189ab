//! # Anvil-Chain Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for the validator
//! └── src/
//!     ├── fixtures.rs   # Block builders and a wired test node
//!     └── integration/  # Cross-subsystem flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ac-tests
//!
//! # By category
//! cargo test -p ac-tests integration::
//!
//! # Benchmarks
//! cargo bench -p ac-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
