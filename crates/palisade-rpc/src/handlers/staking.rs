// crates/palisade-rpc/src/handlers/staking.rs
//
// Staking handlers: Stake, Unstake, Info.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use palisade_core::Principal;
use palisade_economics::StakeRecord;
use palisade_runtime::{CallContext, ChainClock, PalisadeRuntime};

// ---------------------------------------------------------------------------
// Stake
// ---------------------------------------------------------------------------

/// Request to stake $PALE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeRequest {
    /// Hex-encoded principal of the staker.
    pub sender: String,
    /// Amount to stake in base units.
    pub amount: u64,
}

/// Response from a successful stake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeResponse {
    pub staker: String,
    pub amount: u64,
    /// First height at which the stake can be withdrawn.
    pub unlocks_at: u64,
}

/// Handle a staking/stake request.
pub async fn handle_stake(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    chain: &Arc<ChainClock>,
    request: StakeRequest,
) -> Result<StakeResponse, String> {
    let sender = Principal::from_hex(&request.sender).map_err(|e| e.to_string())?;

    let mut runtime = runtime.write().await;
    let ctx = CallContext::new(sender, chain.current());
    runtime
        .stake_tokens(&ctx, request.amount)
        .map_err(|e| e.to_string())?;

    let unlocks_at = runtime
        .stake_of(&sender)
        .map(|s| s.unlocks_at())
        .unwrap_or_default();
    Ok(StakeResponse {
        staker: request.sender,
        amount: request.amount,
        unlocks_at,
    })
}

// ---------------------------------------------------------------------------
// Unstake
// ---------------------------------------------------------------------------

/// Request to withdraw the sender's active stake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnstakeRequest {
    /// Hex-encoded principal of the staker.
    pub sender: String,
}

/// Response from a successful unstake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnstakeResponse {
    pub staker: String,
    /// Amount released back to the staker's balance.
    pub amount_returned: u64,
}

/// Handle a staking/unstake request.
pub async fn handle_unstake(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    chain: &Arc<ChainClock>,
    request: UnstakeRequest,
) -> Result<UnstakeResponse, String> {
    let sender = Principal::from_hex(&request.sender).map_err(|e| e.to_string())?;

    let mut runtime = runtime.write().await;
    let ctx = CallContext::new(sender, chain.current());
    let amount_returned = runtime.unstake_tokens(&ctx).map_err(|e| e.to_string())?;
    Ok(UnstakeResponse {
        staker: request.sender,
        amount_returned,
    })
}

// ---------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------

/// Request for a principal's stake and balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeInfoRequest {
    /// Hex-encoded principal.
    pub principal: String,
}

/// Response carrying the active stake, if any, and the spendable
/// balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeInfoResponse {
    pub stake: Option<StakeRecord>,
    pub balance: u64,
}

/// Handle a staking/info request.
pub async fn handle_info(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    request: StakeInfoRequest,
) -> Result<StakeInfoResponse, String> {
    let principal = Principal::from_hex(&request.principal).map_err(|e| e.to_string())?;

    let runtime = runtime.read().await;
    Ok(StakeInfoResponse {
        stake: runtime.stake_of(&principal).cloned(),
        balance: runtime.token_balance(&principal),
    })
}
