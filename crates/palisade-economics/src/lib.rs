// crates/palisade-economics/src/lib.rs
//
// palisade-economics: $PALE token custody and the staking ledger for the
// Palisade Protocol.
//
// The vault is the in-memory implementation of the token custody seam;
// the staking ledger enforces the minimum stake, the one-active-stake
// rule, and the lockup period.

pub mod staking;
pub mod token;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use palisade_economics::StakeLedger;`

pub use staking::{StakeLedger, StakeRecord, MIN_STAKE_AMOUNT, STAKE_LOCKUP_PERIOD};
pub use token::{Pale, TokenVault};
