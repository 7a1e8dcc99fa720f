// crates/palisade-core/src/content.rs
//
// Content records and vote records for the moderation state machine.
// Records are plain data; all validation lives in the moderation crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::PalisadeError;
use crate::identity::Principal;

/// Sequential content identifier, assigned from 1 in submission order.
/// Id 0 is never assigned.
pub type ContentId = u64;

/// Hash of a piece of submitted content. Exactly 32 bytes, supplied by
/// the submitter and stored opaquely; the protocol never inspects it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(pub [u8; 32]);

impl ContentHash {
    pub const LEN: usize = 32;

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// SHA-256 digest of arbitrary bytes, for callers that hold raw
    /// content rather than a precomputed hash.
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Parse a content hash from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, PalisadeError> {
        let bytes = hex::decode(s)
            .map_err(|_| PalisadeError::Encoding(format!("invalid hex content hash: {}", s)))?;
        if bytes.len() != Self::LEN {
            return Err(PalisadeError::Encoding(format!(
                "content hash must be {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }
        let mut out = [0u8; Self::LEN];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.to_hex())
    }
}

impl FromStr for ContentHash {
    type Err = PalisadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ContentHash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Lifecycle status of a content record.
///
/// Transitions are `Pending -> Approved` or `Pending -> Rejected`, each
/// applied exactly once by finalization. No other transition exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    /// Voting window open or not yet finalized.
    Pending,
    /// Finalized with more votes for than against.
    Approved,
    /// Finalized with votes for not exceeding votes against (ties reject).
    Rejected,
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentStatus::Pending => "pending",
            ContentStatus::Approved => "approved",
            ContentStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Direction of a moderation vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    /// Count toward approval.
    For,
    /// Count toward rejection.
    Against,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VoteDirection::For => "for",
            VoteDirection::Against => "against",
        };
        f.write_str(s)
    }
}

/// A submitted piece of content and its moderation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Sequential id assigned at submission.
    pub id: ContentId,
    /// Principal that submitted the content.
    pub author: Principal,
    /// Submitter-supplied hash of the content itself.
    pub content_hash: ContentHash,
    /// Current lifecycle status.
    pub status: ContentStatus,
    /// Block height at submission.
    pub created_at: u64,
    /// Votes counted toward approval.
    pub votes_for: u64,
    /// Votes counted toward rejection.
    pub votes_against: u64,
    /// First height at which the record is finalizable. Votes are
    /// accepted strictly below this height.
    pub voting_ends_at: u64,
}

impl ContentRecord {
    /// Whether a vote cast at `height` falls inside the voting window.
    /// The window is half-open: closed at `voting_ends_at`.
    pub fn voting_open(&self, height: u64) -> bool {
        height < self.voting_ends_at
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, ContentStatus::Pending)
    }
}

/// An immutable record of one cast vote, keyed by (content, voter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRecord {
    pub content_id: ContentId,
    pub voter: Principal,
    pub direction: VoteDirection,
    /// Block height at which the vote was cast.
    pub cast_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> ContentRecord {
        ContentRecord {
            id: 1,
            author: Principal::from_bytes([1u8; 32]),
            content_hash: ContentHash::from_bytes([2u8; 32]),
            status: ContentStatus::Pending,
            created_at: 100,
            votes_for: 0,
            votes_against: 0,
            voting_ends_at: 244,
        }
    }

    #[test]
    fn test_digest_is_sha256() {
        let h = ContentHash::digest(b"hello");
        assert_eq!(
            h.to_hex(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_hash_hex_round_trip() {
        let h = ContentHash::digest(b"round trip");
        assert_eq!(ContentHash::from_hex(&h.to_hex()).unwrap(), h);
    }

    #[test]
    fn test_hash_from_hex_rejects_malformed() {
        assert!(ContentHash::from_hex("abcd").is_err());
        assert!(ContentHash::from_hex(&"zz".repeat(32)).is_err());
        // Signed pairs are integer syntax, not hex.
        assert!(ContentHash::from_hex(&"+1".repeat(32)).is_err());
    }

    #[test]
    fn test_voting_open_boundary() {
        let record = make_record();
        assert!(record.voting_open(100));
        assert!(record.voting_open(243));
        assert!(!record.voting_open(244));
        assert!(!record.voting_open(500));
    }

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentStatus::Approved).unwrap(),
            "\"approved\""
        );
        let status: ContentStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, ContentStatus::Rejected);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = make_record();
        let json = serde_json::to_string(&record).unwrap();
        // Keys and hashes travel as hex strings.
        assert!(json.contains(&"02".repeat(32)));
        let back: ContentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.author, record.author);
        assert_eq!(back.status, record.status);
        assert_eq!(back.voting_ends_at, record.voting_ends_at);
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(
            serde_json::to_string(&VoteDirection::For).unwrap(),
            "\"for\""
        );
        let d: VoteDirection = serde_json::from_str("\"against\"").unwrap();
        assert_eq!(d, VoteDirection::Against);
    }
}
