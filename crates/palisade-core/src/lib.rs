// crates/palisade-core/src/lib.rs
//
// palisade-core: Core types, traits, and identity primitives for the
// Palisade Protocol.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the canonical data structures, the shared error type, and the
// trait interface to the token custody collaborator.

pub mod content;
pub mod error;
pub mod identity;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use palisade_core::Principal;`

// Content types
pub use content::{ContentHash, ContentId, ContentRecord, ContentStatus, VoteDirection, VoteRecord};

// Identity types
pub use identity::Principal;

// Error type
pub use error::PalisadeError;

// Traits
pub use traits::TokenTransfer;
