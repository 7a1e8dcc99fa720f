// crates/palisade-rpc/src/handlers/reputation.rs
//
// Reputation handlers: Get and the devnet Grant extension point.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use palisade_core::Principal;
use palisade_runtime::PalisadeRuntime;

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// Request for a principal's reputation score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetReputationRequest {
    /// Hex-encoded principal.
    pub principal: String,
}

/// Response carrying the score. Unknown principals score 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetReputationResponse {
    pub principal: String,
    pub score: u64,
}

/// Handle a reputation/get request.
pub async fn handle_get(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    request: GetReputationRequest,
) -> Result<GetReputationResponse, String> {
    let principal = Principal::from_hex(&request.principal).map_err(|e| e.to_string())?;

    let runtime = runtime.read().await;
    Ok(GetReputationResponse {
        score: runtime.get_user_reputation(&principal),
        principal: request.principal,
    })
}

// ---------------------------------------------------------------------------
// Grant
// ---------------------------------------------------------------------------

/// Request to set a principal's reputation score.
///
/// Devnet surface for the host-side extension point; no moderation
/// operation ever adjusts a score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantReputationRequest {
    /// Hex-encoded principal.
    pub principal: String,
    /// New score, overwriting any previous value.
    pub score: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantReputationResponse {
    pub principal: String,
    pub score: u64,
}

/// Handle an admin/grant_reputation request.
pub async fn handle_grant(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    request: GrantReputationRequest,
) -> Result<GrantReputationResponse, String> {
    let principal = Principal::from_hex(&request.principal).map_err(|e| e.to_string())?;

    let mut runtime = runtime.write().await;
    runtime.grant_reputation(principal, request.score);
    tracing::info!("Reputation of {} set to {}", request.principal, request.score);
    Ok(GrantReputationResponse {
        principal: request.principal,
        score: request.score,
    })
}
