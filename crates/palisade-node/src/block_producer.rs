// crates/palisade-node/src/block_producer.rs
//
// Block producer for the Palisade Protocol node.
//
// Simulates block progression by advancing the shared chain clock at a
// configurable interval. Devnets that prefer manual height control set
// the interval to zero and drive the clock over RPC instead.

use std::sync::Arc;
use std::time::Duration;

use palisade_runtime::ChainClock;

/// Producer that advances the chain clock at fixed wall-clock intervals.
pub struct BlockProducer {
    /// Clock shared with the RPC server.
    clock: Arc<ChainClock>,
    /// Milliseconds between produced blocks.
    interval_ms: u64,
}

impl BlockProducer {
    /// Create a new BlockProducer over the given clock.
    pub fn new(clock: Arc<ChainClock>, interval_ms: u64) -> Self {
        Self { clock, interval_ms }
    }

    /// Run the producer loop, advancing one block per interval.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        tracing::info!(
            "Block producer started (interval_ms={})",
            self.interval_ms
        );

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Block producer received shutdown signal");
                    break;
                }
                _ = tokio::time::sleep(Duration::from_millis(self.interval_ms)) => {
                    let height = self.clock.advance(1);
                    tracing::trace!("Block {}", height);
                }
            }
        }

        Ok(())
    }
}
