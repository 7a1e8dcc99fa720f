// crates/palisade-rpc/src/handlers/chain.rs
//
// Devnet chain handlers: Height and Advance.
//
// chain/advance exists so a devnet can cross a voting window or a
// lockup without waiting for the block producer. The clock only moves
// forward; there is no rewind method.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use palisade_runtime::ChainClock;

// ---------------------------------------------------------------------------
// Height
// ---------------------------------------------------------------------------

/// Response carrying the current block height.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightResponse {
    pub height: u64,
}

/// Handle a chain/height request.
pub async fn handle_height(chain: &Arc<ChainClock>) -> Result<HeightResponse, String> {
    Ok(HeightResponse {
        height: chain.current(),
    })
}

// ---------------------------------------------------------------------------
// Advance
// ---------------------------------------------------------------------------

/// Request to advance the devnet clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceRequest {
    /// Number of blocks to advance. Defaults to 1.
    #[serde(default = "default_blocks")]
    pub blocks: u64,
}

fn default_blocks() -> u64 {
    1
}

/// Response carrying the height after the jump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceResponse {
    pub height: u64,
}

/// Handle a chain/advance request.
pub async fn handle_advance(
    chain: &Arc<ChainClock>,
    request: AdvanceRequest,
) -> Result<AdvanceResponse, String> {
    let height = chain.advance(request.blocks);
    tracing::info!("Chain advanced {} blocks to height {}", request.blocks, height);
    Ok(AdvanceResponse { height })
}
