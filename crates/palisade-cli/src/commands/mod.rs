// crates/palisade-cli/src/commands/mod.rs
//
// Command module declarations for the Palisade CLI.

pub mod chain;
pub mod content;
pub mod finalize;
pub mod reputation;
pub mod stake;
pub mod status;
pub mod vote;
