// crates/palisade-runtime/src/lib.rs
//
// palisade-runtime: The moderation runtime facade for the Palisade
// Protocol.
//
// Hosts the four ledgers behind a single struct exposing the public
// operations. Every mutating call carries a CallContext with the sender
// and the current block height; the runtime itself never reads a clock
// and performs no I/O.

pub mod chain;
pub mod context;
pub mod runtime;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use palisade_runtime::PalisadeRuntime;`

pub use chain::ChainClock;
pub use context::CallContext;
pub use runtime::PalisadeRuntime;
