// crates/palisade-rpc/src/handlers/moderation.rs
//
// Moderation handlers: Vote, Finalize, HasVoted.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use palisade_core::{ContentId, ContentStatus, Principal, VoteDirection};
use palisade_runtime::{CallContext, ChainClock, PalisadeRuntime};

// ---------------------------------------------------------------------------
// Vote
// ---------------------------------------------------------------------------

/// Request to cast a moderation vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRequest {
    /// Hex-encoded principal of the voter.
    pub sender: String,
    pub content_id: ContentId,
    /// "for" or "against".
    pub direction: VoteDirection,
}

/// Response echoing the updated tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteResponse {
    pub content_id: ContentId,
    pub votes_for: u64,
    pub votes_against: u64,
}

/// Handle a moderation/vote request.
pub async fn handle_vote(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    chain: &Arc<ChainClock>,
    request: VoteRequest,
) -> Result<VoteResponse, String> {
    let sender = Principal::from_hex(&request.sender).map_err(|e| e.to_string())?;

    let mut runtime = runtime.write().await;
    let ctx = CallContext::new(sender, chain.current());
    runtime
        .vote(&ctx, request.content_id, request.direction)
        .map_err(|e| e.to_string())?;

    let record = runtime
        .get_content(request.content_id)
        .ok_or_else(|| format!("Content not found: {}", request.content_id))?;
    Ok(VoteResponse {
        content_id: record.id,
        votes_for: record.votes_for,
        votes_against: record.votes_against,
    })
}

// ---------------------------------------------------------------------------
// Finalize
// ---------------------------------------------------------------------------

/// Request to finalize a content record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeRequest {
    /// Hex-encoded principal of the caller. Any principal may finalize.
    pub sender: String,
    pub content_id: ContentId,
}

/// Response carrying the final status and the deciding tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizeResponse {
    pub content_id: ContentId,
    pub status: ContentStatus,
    pub votes_for: u64,
    pub votes_against: u64,
}

/// Handle a moderation/finalize request.
pub async fn handle_finalize(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    chain: &Arc<ChainClock>,
    request: FinalizeRequest,
) -> Result<FinalizeResponse, String> {
    let sender = Principal::from_hex(&request.sender).map_err(|e| e.to_string())?;

    let mut runtime = runtime.write().await;
    let ctx = CallContext::new(sender, chain.current());
    let status = runtime
        .finalize_moderation(&ctx, request.content_id)
        .map_err(|e| e.to_string())?;

    let record = runtime
        .get_content(request.content_id)
        .ok_or_else(|| format!("Content not found: {}", request.content_id))?;
    Ok(FinalizeResponse {
        content_id: record.id,
        status,
        votes_for: record.votes_for,
        votes_against: record.votes_against,
    })
}

// ---------------------------------------------------------------------------
// HasVoted
// ---------------------------------------------------------------------------

/// Request to check whether a principal has voted on a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HasVotedRequest {
    pub content_id: ContentId,
    /// Hex-encoded principal to check.
    pub principal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HasVotedResponse {
    pub content_id: ContentId,
    pub principal: String,
    pub has_voted: bool,
}

/// Handle a moderation/has_voted request.
pub async fn handle_has_voted(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    request: HasVotedRequest,
) -> Result<HasVotedResponse, String> {
    let principal = Principal::from_hex(&request.principal).map_err(|e| e.to_string())?;

    let runtime = runtime.read().await;
    Ok(HasVotedResponse {
        content_id: request.content_id,
        principal: request.principal,
        has_voted: runtime.has_voted(request.content_id, &principal),
    })
}
