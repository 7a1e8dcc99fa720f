// crates/palisade-rpc/src/lib.rs
//
// palisade-rpc: JSON-RPC server and handlers for the Palisade Protocol.
//
// Serves a JSON-RPC-style envelope over HTTP: a single POST /rpc
// endpoint dispatching on a method string, plus GET /health for
// liveness probes. Handlers are typed request/response structs; the
// shared runtime sits behind an async RwLock held for the whole call.

pub mod handlers;
pub mod server;

// Re-export the main server types for ergonomic access.
pub use server::PalisadeRpcServer;
pub use server::RpcConfig;
pub use server::{JsonRpcRequest, JsonRpcResponse};
