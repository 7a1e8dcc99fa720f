// crates/palisade-moderation/src/voting.rs
//
// Voting engine: validates and records moderation votes.
//
// Validation order is fixed and observable through the returned error:
// existence, then window, then reputation, then duplicate vote. A
// successful cast is the only path that increments a tally, and it
// increments exactly one tally by exactly 1.

use std::collections::HashMap;

use palisade_core::{ContentId, PalisadeError, Principal, VoteDirection, VoteRecord};

use crate::registry::ContentRegistry;
use crate::reputation::ReputationLedger;

/// Minimum reputation score required to vote.
pub const MIN_VOTE_REPUTATION: u64 = 10;

/// Ledger of cast votes, keyed by (content, voter).
///
/// Entries are never mutated or removed: one vote per (content,
/// principal), forever, with an immutable direction. The tuple-keyed map
/// is an in-memory shape only; it does not serialize as JSON.
#[derive(Debug, Clone)]
pub struct VoteLedger {
    votes: HashMap<(ContentId, Principal), VoteRecord>,
}

impl VoteLedger {
    /// Create an empty vote ledger.
    pub fn new() -> Self {
        Self {
            votes: HashMap::new(),
        }
    }

    /// Cast a vote on behalf of `voter` at `height`.
    ///
    /// Checks, in order: the content exists (`ContentNotFound`), the
    /// window is still open (`NotAuthorized` at or after
    /// `voting_ends_at`), the voter meets the reputation threshold
    /// (`InsufficientReputation`), and the voter has not already voted
    /// (`AlreadyVoted`). Only after all checks pass is the vote recorded
    /// and the matching tally incremented.
    pub fn cast(
        &mut self,
        registry: &mut ContentRegistry,
        reputation: &ReputationLedger,
        voter: Principal,
        content_id: ContentId,
        direction: VoteDirection,
        height: u64,
    ) -> Result<(), PalisadeError> {
        let record = registry
            .get_mut(content_id)
            .ok_or(PalisadeError::ContentNotFound(content_id))?;
        if !record.voting_open(height) {
            return Err(PalisadeError::NotAuthorized);
        }
        let score = reputation.score_of(&voter);
        if score < MIN_VOTE_REPUTATION {
            return Err(PalisadeError::InsufficientReputation {
                score,
                required: MIN_VOTE_REPUTATION,
            });
        }
        if self.votes.contains_key(&(content_id, voter)) {
            return Err(PalisadeError::AlreadyVoted(content_id));
        }

        self.votes.insert(
            (content_id, voter),
            VoteRecord {
                content_id,
                voter,
                direction,
                cast_at: height,
            },
        );
        match direction {
            VoteDirection::For => record.votes_for += 1,
            VoteDirection::Against => record.votes_against += 1,
        }
        Ok(())
    }

    /// Whether `voter` has voted on `content_id`.
    pub fn has_voted(&self, content_id: ContentId, voter: &Principal) -> bool {
        self.votes.contains_key(&(content_id, *voter))
    }

    /// The recorded vote, if any.
    pub fn get(&self, content_id: ContentId, voter: &Principal) -> Option<&VoteRecord> {
        self.votes.get(&(content_id, *voter))
    }
}

impl Default for VoteLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palisade_core::ContentHash;

    use crate::registry::VOTING_PERIOD;

    fn voter(byte: u8) -> Principal {
        Principal::from_bytes([byte; 32])
    }

    /// Registry with one record created at height 100, a reputation
    /// ledger where voter 1 holds exactly the threshold, and an empty
    /// vote ledger.
    fn setup() -> (ContentRegistry, ReputationLedger, VoteLedger, ContentId) {
        let mut registry = ContentRegistry::new();
        let id = registry.submit(voter(9), ContentHash::from_bytes([0xaa; 32]), 100);
        let mut reputation = ReputationLedger::new();
        reputation.set_score(voter(1), MIN_VOTE_REPUTATION);
        (registry, reputation, VoteLedger::new(), id)
    }

    #[test]
    fn test_successful_vote_increments_one_tally() {
        let (mut registry, reputation, mut votes, id) = setup();
        votes
            .cast(&mut registry, &reputation, voter(1), id, VoteDirection::For, 100)
            .unwrap();
        let record = registry.get(id).unwrap();
        assert_eq!(record.votes_for, 1);
        assert_eq!(record.votes_against, 0);
        assert!(votes.has_voted(id, &voter(1)));
        assert_eq!(votes.get(id, &voter(1)).unwrap().cast_at, 100);
    }

    #[test]
    fn test_unknown_content_fails_regardless_of_caller() {
        let (mut registry, reputation, mut votes, _) = setup();
        // Even a zero-reputation caller sees ContentNotFound first.
        let err = votes
            .cast(&mut registry, &reputation, voter(42), 999, VoteDirection::Against, 100)
            .unwrap_err();
        assert!(matches!(err, PalisadeError::ContentNotFound(999)));
    }

    #[test]
    fn test_window_boundary() {
        let (mut registry, reputation, mut votes, id) = setup();
        // Last valid height is created_at + VOTING_PERIOD - 1.
        votes
            .cast(
                &mut registry,
                &reputation,
                voter(1),
                id,
                VoteDirection::For,
                100 + VOTING_PERIOD - 1,
            )
            .unwrap();

        let err = votes
            .cast(
                &mut registry,
                &reputation,
                voter(2),
                id,
                VoteDirection::For,
                100 + VOTING_PERIOD,
            )
            .unwrap_err();
        assert!(matches!(err, PalisadeError::NotAuthorized));
    }

    #[test]
    fn test_closed_window_precedes_reputation_check() {
        let (mut registry, reputation, mut votes, id) = setup();
        // voter(3) has no reputation at all; after the window the error
        // must still be the window refusal, not the reputation one.
        let err = votes
            .cast(
                &mut registry,
                &reputation,
                voter(3),
                id,
                VoteDirection::For,
                100 + VOTING_PERIOD,
            )
            .unwrap_err();
        assert!(matches!(err, PalisadeError::NotAuthorized));
    }

    #[test]
    fn test_reputation_threshold() {
        let (mut registry, mut reputation, mut votes, id) = setup();
        reputation.set_score(voter(2), MIN_VOTE_REPUTATION - 1);
        let err = votes
            .cast(&mut registry, &reputation, voter(2), id, VoteDirection::For, 100)
            .unwrap_err();
        assert!(matches!(
            err,
            PalisadeError::InsufficientReputation { score: 9, required: 10 }
        ));

        // Exactly the threshold is enough.
        votes
            .cast(&mut registry, &reputation, voter(1), id, VoteDirection::For, 100)
            .unwrap();
    }

    #[test]
    fn test_double_vote_rejected_and_tallies_unchanged() {
        let (mut registry, reputation, mut votes, id) = setup();
        votes
            .cast(&mut registry, &reputation, voter(1), id, VoteDirection::For, 100)
            .unwrap();
        // Opposite direction makes no difference.
        let err = votes
            .cast(&mut registry, &reputation, voter(1), id, VoteDirection::Against, 101)
            .unwrap_err();
        assert!(matches!(err, PalisadeError::AlreadyVoted(i) if i == id));

        let record = registry.get(id).unwrap();
        assert_eq!(record.votes_for, 1);
        assert_eq!(record.votes_against, 0);
    }

    #[test]
    fn test_failed_vote_leaves_no_record() {
        let (mut registry, reputation, mut votes, id) = setup();
        let _ = votes.cast(&mut registry, &reputation, voter(7), id, VoteDirection::For, 100);
        assert!(!votes.has_voted(id, &voter(7)));
        assert_eq!(registry.get(id).unwrap().votes_for, 0);
    }
}
