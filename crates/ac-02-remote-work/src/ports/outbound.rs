//! Driven ports (outbound dependencies)

/// Local mining hashrate source
pub trait HashrateMeter: Send + Sync {
    fn local_hashrate(&self) -> u64;
}

/// A node that does not mine locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalMining;

impl HashrateMeter for NoLocalMining {
    fn local_hashrate(&self) -> u64 {
        0
    }
}
