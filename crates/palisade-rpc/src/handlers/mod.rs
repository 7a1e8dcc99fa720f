// crates/palisade-rpc/src/handlers/mod.rs
//
// RPC handler modules, one per method family.

pub mod chain;
pub mod content;
pub mod moderation;
pub mod node;
pub mod reputation;
pub mod staking;
