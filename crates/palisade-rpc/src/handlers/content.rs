// crates/palisade-rpc/src/handlers/content.rs
//
// Content handlers: Submit, Get, List.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use palisade_core::{ContentHash, ContentId, ContentRecord, ContentStatus, Principal};
use palisade_runtime::{CallContext, ChainClock, PalisadeRuntime};

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

/// Request to submit content for moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitContentRequest {
    /// Hex-encoded principal of the submitter.
    pub sender: String,
    /// Hex-encoded 32-byte content hash.
    pub content_hash: String,
}

/// Response from a content submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitContentResponse {
    /// The id assigned to the new record.
    pub content_id: ContentId,
    /// First height at which the record can be finalized.
    pub voting_ends_at: u64,
}

/// Handle a content/submit request.
pub async fn handle_submit(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    chain: &Arc<ChainClock>,
    request: SubmitContentRequest,
) -> Result<SubmitContentResponse, String> {
    let sender = Principal::from_hex(&request.sender).map_err(|e| e.to_string())?;
    let content_hash = ContentHash::from_hex(&request.content_hash).map_err(|e| e.to_string())?;

    let mut runtime = runtime.write().await;
    let ctx = CallContext::new(sender, chain.current());
    let content_id = runtime.submit_content(&ctx, content_hash);
    let voting_ends_at = runtime
        .get_content(content_id)
        .map(|r| r.voting_ends_at)
        .unwrap_or_default();
    Ok(SubmitContentResponse {
        content_id,
        voting_ends_at,
    })
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// Request to look up a content record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetContentRequest {
    pub content_id: ContentId,
}

/// Response carrying the record, or null for an unknown id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetContentResponse {
    pub content: Option<ContentRecord>,
}

/// Handle a content/get request.
pub async fn handle_get(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    request: GetContentRequest,
) -> Result<GetContentResponse, String> {
    let runtime = runtime.read().await;
    Ok(GetContentResponse {
        content: runtime.get_content(request.content_id).cloned(),
    })
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// Request to list content records, optionally filtered by status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListContentRequest {
    #[serde(default)]
    pub status: Option<ContentStatus>,
}

/// Response carrying the matching records in id order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListContentResponse {
    pub contents: Vec<ContentRecord>,
}

/// Handle a content/list request.
pub async fn handle_list(
    runtime: &Arc<RwLock<PalisadeRuntime>>,
    request: ListContentRequest,
) -> Result<ListContentResponse, String> {
    let runtime = runtime.read().await;
    Ok(ListContentResponse {
        contents: runtime.list_content(request.status),
    })
}
