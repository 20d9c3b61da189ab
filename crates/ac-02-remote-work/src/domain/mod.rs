//! Domain layer: state owned by the sealer loop.
//!
//! Nothing here is shared. Both types are mutated only from inside the loop.

pub mod hashrate;
pub mod work_book;

pub use hashrate::{HashrateRecord, HashrateTable};
pub use work_book::{PendingWork, WorkBook};
