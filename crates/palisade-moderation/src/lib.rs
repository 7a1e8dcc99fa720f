// crates/palisade-moderation/src/lib.rs
//
// palisade-moderation: Content registry, voting engine, finalization,
// and reputation ledger for the Palisade Protocol.
//
// This crate owns every write to content records. Vote tallies and
// status transitions can only be reached through the voting engine and
// the finalization resolver; nothing outside the crate can obtain a
// mutable record.

pub mod finalize;
pub mod registry;
pub mod reputation;
pub mod voting;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use palisade_moderation::ContentRegistry;`

pub use finalize::{decide_outcome, finalize_content};
pub use registry::{ContentRegistry, VOTING_PERIOD};
pub use reputation::ReputationLedger;
pub use voting::{VoteLedger, MIN_VOTE_REPUTATION};
