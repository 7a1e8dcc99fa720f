use thiserror::Error;

use crate::content::ContentId;

/// Protocol-wide error types for the Palisade Protocol.
#[derive(Debug, Error)]
pub enum PalisadeError {
    /// Operation refused for the caller at the current block height.
    ///
    /// Covers a closed voting window, finalization before the window
    /// ends, finalization of an already-finalized record, and unstaking
    /// before the lockup expires.
    #[error("Not authorized")]
    NotAuthorized,

    /// No content record exists with the given id.
    #[error("Content not found: {0}")]
    ContentNotFound(ContentId),

    /// Voter's reputation score is below the voting threshold.
    #[error("Insufficient reputation: score {score} is below required {required}")]
    InsufficientReputation { score: u64, required: u64 },

    /// The principal has already voted on this content.
    #[error("Already voted on content {0}")]
    AlreadyVoted(ContentId),

    /// Stake amount is below the protocol minimum.
    #[error("Invalid stake: {amount} is below minimum {minimum}")]
    InvalidStake { amount: u64, minimum: u64 },

    /// The principal already has an active stake.
    #[error("Already staked")]
    AlreadyStaked,

    /// The principal has no active stake.
    #[error("No stake found")]
    NoStakeFound,

    /// Token custody collaborator refused a transfer.
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },

    /// Hex or JSON decoding failure at a serialized boundary.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for PalisadeError {
    fn from(e: serde_json::Error) -> Self {
        PalisadeError::Encoding(e.to_string())
    }
}
