//! Remote-work service layer
//!
//! # Architecture
//! - `SealerLoop` owns all mutable state and serves one request at a time
//! - `RemoteWorkCoordinator` is the cloneable handle callers talk through
//! - `RemoteWorkService` adapts the handle to the RPC-facing API

mod api;
mod coordinator;
mod sealer;


pub use api::RemoteWorkService;
pub use coordinator::RemoteWorkCoordinator;
