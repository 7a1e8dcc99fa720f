// crates/palisade-runtime/src/chain.rs
//
// Forward-only block height counter for a devnet node.
//
// The runtime never reads this directly; heights reach operations
// through CallContext. The node's block producer and the devnet
// chain/advance RPC are the only writers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing block-height counter.
#[derive(Debug)]
pub struct ChainClock {
    height: AtomicU64,
}

impl ChainClock {
    /// Create a clock at height 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a clock at an arbitrary starting height.
    pub fn starting_at(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Current block height.
    pub fn current(&self) -> u64 {
        self.height.load(Ordering::SeqCst)
    }

    /// Advance by `blocks` and return the new height. There is no way
    /// to move the clock backwards.
    pub fn advance(&self, blocks: u64) -> u64 {
        self.height.fetch_add(blocks, Ordering::SeqCst) + blocks
    }
}

impl Default for ChainClock {
    fn default() -> Self {
        Self::new()
    }
}
