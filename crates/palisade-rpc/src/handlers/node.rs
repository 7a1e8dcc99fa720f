// crates/palisade-rpc/src/handlers/node.rs
//
// Node handlers: Health and Info.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use palisade_runtime::{ChainClock, PalisadeRuntime};

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

/// Basic liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub height: u64,
}

/// Handle a node/health request.
pub async fn handle_health(
    _runtime: &Arc<RwLock<PalisadeRuntime>>,
    chain: &Arc<ChainClock>,
) -> Result<HealthResponse, String> {
    Ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        height: chain.current(),
    })
}

// ---------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------

/// Node and ledger statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub version: String,
    pub height: u64,
    /// Number of content records ever submitted.
    pub content_count: u64,
    /// Sum of all active stakes.
    pub total_staked: u64,
}

/// Handle a node/info request.
pub async fn handle_info(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    chain: &Arc<ChainClock>,
) -> Result<InfoResponse, String> {
    let runtime = runtime.read().await;
    Ok(InfoResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        height: chain.current(),
        content_count: runtime.content_count() as u64,
        total_staked: runtime.total_staked(),
    })
}
