// crates/palisade-rpc/src/server.rs
//
// The Palisade RPC server: axum router, JSON-RPC envelope, and method
// dispatch.
//
// Every method lives under POST /rpc with a { method, params } body and
// a { success, result, error } reply. Mutating handlers take the write
// lock on the runtime for the whole call, so each RPC call is one
// atomic operation against the state machine.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use palisade_runtime::{ChainClock, PalisadeRuntime};

use crate::handlers;

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the RPC server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7144,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC Envelope
// ---------------------------------------------------------------------------

/// A JSON-RPC-style request envelope.
/// The client sends a method name and a JSON params payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// The RPC method to invoke (e.g., "content/submit", "staking/stake").
    pub method: String,
    /// JSON-encoded parameters for the method.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// A JSON-RPC-style response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// The result data (if success).
    pub result: Option<serde_json::Value>,
    /// Error message (if not success).
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<RwLock<PalisadeRuntime>>,
    pub chain: Arc<ChainClock>,
}

/// The Palisade RPC server.
pub struct PalisadeRpcServer {
    config: RpcConfig,
    runtime: Arc<RwLock<PalisadeRuntime>>,
    chain: Arc<ChainClock>,
}

impl PalisadeRpcServer {
    pub fn new(
        config: RpcConfig,
        runtime: Arc<RwLock<PalisadeRuntime>>,
        chain: Arc<ChainClock>,
    ) -> Self {
        Self {
            config,
            runtime,
            chain,
        }
    }

    /// Build the axum router. Exposed separately from `start` so tests
    /// can drive it without binding a socket.
    pub fn router(&self) -> Router {
        let state = AppState {
            runtime: self.runtime.clone(),
            chain: self.chain.clone(),
        };
        Router::new()
            .route("/rpc", post(handle_rpc))
            .route("/health", get(health_probe))
            .with_state(state)
    }

    /// Bind and serve until the process shuts down.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("RPC server listening on {}", addr);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Liveness probe for load balancers and local scripts.
async fn health_probe() -> &'static str {
    "ok"
}

async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    Json(dispatch(state, request).await)
}

/// Dispatch a JSON-RPC request to the appropriate handler based on the
/// method name.
async fn dispatch(state: AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    tracing::debug!("RPC call: {}", request.method);

    let runtime = &state.runtime;
    let chain = &state.chain;

    let result = match request.method.as_str() {
        // Content
        "content/submit" => {
            dispatch_handler(request.params, |r| {
                handlers::content::handle_submit(runtime, chain, r)
            })
            .await
        }
        "content/get" => {
            dispatch_handler(request.params, |r| handlers::content::handle_get(runtime, r)).await
        }
        "content/list" => {
            dispatch_handler(request.params, |r| handlers::content::handle_list(runtime, r)).await
        }

        // Moderation
        "moderation/vote" => {
            dispatch_handler(request.params, |r| {
                handlers::moderation::handle_vote(runtime, chain, r)
            })
            .await
        }
        "moderation/finalize" => {
            dispatch_handler(request.params, |r| {
                handlers::moderation::handle_finalize(runtime, chain, r)
            })
            .await
        }
        "moderation/has_voted" => {
            dispatch_handler(request.params, |r| {
                handlers::moderation::handle_has_voted(runtime, r)
            })
            .await
        }

        // Reputation
        "reputation/get" => {
            dispatch_handler(request.params, |r| {
                handlers::reputation::handle_get(runtime, r)
            })
            .await
        }
        "admin/grant_reputation" => {
            dispatch_handler(request.params, |r| {
                handlers::reputation::handle_grant(runtime, r)
            })
            .await
        }

        // Staking
        "staking/stake" => {
            dispatch_handler(request.params, |r| {
                handlers::staking::handle_stake(runtime, chain, r)
            })
            .await
        }
        "staking/unstake" => {
            dispatch_handler(request.params, |r| {
                handlers::staking::handle_unstake(runtime, chain, r)
            })
            .await
        }
        "staking/info" => {
            dispatch_handler(request.params, |r| handlers::staking::handle_info(runtime, r)).await
        }

        // Chain (devnet)
        "chain/height" => match handlers::chain::handle_height(chain).await {
            Ok(resp) => serde_json::to_value(resp)
                .map_err(|e| format!("Failed to serialize response: {}", e)),
            Err(e) => Err(e),
        },
        "chain/advance" => {
            dispatch_handler(request.params, |r| handlers::chain::handle_advance(chain, r)).await
        }

        // Node
        "node/health" => match handlers::node::handle_health(runtime, chain).await {
            Ok(resp) => serde_json::to_value(resp)
                .map_err(|e| format!("Failed to serialize response: {}", e)),
            Err(e) => Err(e),
        },
        "node/info" => match handlers::node::handle_info(runtime, chain).await {
            Ok(resp) => serde_json::to_value(resp)
                .map_err(|e| format!("Failed to serialize response: {}", e)),
            Err(e) => Err(e),
        },

        _ => Err(format!("Unknown method: {}", request.method)),
    };

    match result {
        Ok(value) => JsonRpcResponse {
            success: true,
            result: Some(value),
            error: None,
        },
        Err(err) => JsonRpcResponse {
            success: false,
            result: None,
            error: Some(err),
        },
    }
}

/// Generic dispatch helper: deserialize params into a request type,
/// call the handler, and serialize the result to JSON.
async fn dispatch_handler<Req, Resp, F, Fut>(
    params: serde_json::Value,
    handler: F,
) -> Result<serde_json::Value, String>
where
    Req: serde::de::DeserializeOwned,
    Resp: serde::Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: std::future::Future<Output = Result<Resp, String>>,
{
    let request: Req = serde_json::from_value(params)
        .map_err(|e| format!("Failed to deserialize request: {}", e))?;
    let response = handler(request).await?;
    serde_json::to_value(response).map_err(|e| format!("Failed to serialize response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use palisade_core::Principal;
    use palisade_economics::TokenVault;

    fn author_hex() -> String {
        "01".repeat(32)
    }

    fn voter_hex() -> String {
        "02".repeat(32)
    }

    /// Router over a runtime with one funded author and one eligible
    /// voter, clock at height 100.
    fn test_router() -> Router {
        let mut vault = TokenVault::new();
        vault.credit(Principal::from_bytes([1u8; 32]), 10_000);
        let mut runtime = PalisadeRuntime::new(Box::new(vault));
        runtime.grant_reputation(Principal::from_bytes([2u8; 32]), 50);

        let server = PalisadeRpcServer::new(
            RpcConfig::default(),
            Arc::new(RwLock::new(runtime)),
            Arc::new(ChainClock::starting_at(100)),
        );
        server.router()
    }

    async fn call(router: Router, method: &str, params: serde_json::Value) -> JsonRpcResponse {
        let envelope = JsonRpcRequest {
            method: method.to_string(),
            params,
        };
        let request = Request::builder()
            .method("POST")
            .uri("/rpc")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&envelope).unwrap()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = test_router();
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submit_then_get() {
        let router = test_router();
        let submit = call(
            router.clone(),
            "content/submit",
            json!({ "sender": author_hex(), "content_hash": "aa".repeat(32) }),
        )
        .await;
        assert!(submit.success, "submit failed: {:?}", submit.error);
        let result = submit.result.unwrap();
        assert_eq!(result["content_id"], 1);
        assert_eq!(result["voting_ends_at"], 100 + 144);

        let get = call(router, "content/get", json!({ "content_id": 1 })).await;
        assert!(get.success);
        let content = &get.result.unwrap()["content"];
        assert_eq!(content["status"], "pending");
        assert_eq!(content["author"], author_hex());
    }

    #[tokio::test]
    async fn test_vote_and_has_voted() {
        let router = test_router();
        call(
            router.clone(),
            "content/submit",
            json!({ "sender": author_hex(), "content_hash": "aa".repeat(32) }),
        )
        .await;

        let vote = call(
            router.clone(),
            "moderation/vote",
            json!({ "sender": voter_hex(), "content_id": 1, "direction": "for" }),
        )
        .await;
        assert!(vote.success, "vote failed: {:?}", vote.error);
        assert_eq!(vote.result.unwrap()["votes_for"], 1);

        let has_voted = call(
            router,
            "moderation/has_voted",
            json!({ "content_id": 1, "principal": voter_hex() }),
        )
        .await;
        assert_eq!(has_voted.result.unwrap()["has_voted"], true);
    }

    #[tokio::test]
    async fn test_protocol_error_maps_to_envelope_error() {
        let router = test_router();
        let vote = call(
            router,
            "moderation/vote",
            json!({ "sender": voter_hex(), "content_id": 42, "direction": "for" }),
        )
        .await;
        assert!(!vote.success);
        assert_eq!(vote.error.unwrap(), "Content not found: 42");
    }

    #[tokio::test]
    async fn test_malformed_principal_is_refused() {
        let router = test_router();
        let response = call(
            router,
            "content/submit",
            json!({ "sender": "not-hex", "content_hash": "aa".repeat(32) }),
        )
        .await;
        assert!(!response.success);
        assert!(response.error.unwrap().starts_with("Encoding error"));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let router = test_router();
        let response = call(router, "bogus/method", json!({})).await;
        assert!(!response.success);
        assert_eq!(response.error.unwrap(), "Unknown method: bogus/method");
    }

    #[tokio::test]
    async fn test_chain_advance_moves_height() {
        let router = test_router();
        let advance = call(router.clone(), "chain/advance", json!({ "blocks": 5 })).await;
        assert!(advance.success);
        assert_eq!(advance.result.unwrap()["height"], 105);

        let height = call(router, "chain/height", json!({})).await;
        assert_eq!(height.result.unwrap()["height"], 105);
    }

    #[tokio::test]
    async fn test_stake_flow_over_rpc() {
        let router = test_router();
        let stake = call(
            router.clone(),
            "staking/stake",
            json!({ "sender": author_hex(), "amount": 1_000 }),
        )
        .await;
        assert!(stake.success, "stake failed: {:?}", stake.error);
        assert_eq!(stake.result.unwrap()["unlocks_at"], 100 + 720);

        let info = call(
            router,
            "staking/info",
            json!({ "principal": author_hex() }),
        )
        .await;
        let result = info.result.unwrap();
        assert_eq!(result["balance"], 9_000);
        assert_eq!(result["stake"]["amount"], 1_000);
    }
}
