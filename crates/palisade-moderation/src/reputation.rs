// crates/palisade-moderation/src/reputation.rs
//
// Reputation ledger: principal -> score.
//
// Read-only from the point of view of the moderation operations; none of
// them ever adjusts a score. Mutation happens only through the explicit
// extension point below, used by genesis seeding and host-side grants.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use palisade_core::Principal;

/// Ledger of reputation scores. Unknown principals hold score 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationLedger {
    scores: HashMap<Principal, u64>,
}

impl ReputationLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }

    /// Current score of `who`. Returns 0 for unknown principals.
    pub fn score_of(&self, who: &Principal) -> u64 {
        self.scores.get(who).copied().unwrap_or(0)
    }

    /// Set the score of `who`, overwriting any previous value.
    ///
    /// This is the mutation extension point: earning rules live with the
    /// host, not in the moderation operations.
    pub fn set_score(&mut self, who: Principal, score: u64) {
        self.scores.insert(who, score);
    }

    /// Number of principals with a recorded score.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for ReputationLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_principal_scores_zero() {
        let ledger = ReputationLedger::new();
        assert_eq!(ledger.score_of(&Principal::from_bytes([5u8; 32])), 0);
    }

    #[test]
    fn test_set_and_overwrite() {
        let mut ledger = ReputationLedger::new();
        let p = Principal::from_bytes([5u8; 32]);
        ledger.set_score(p, 10);
        assert_eq!(ledger.score_of(&p), 10);
        ledger.set_score(p, 3);
        assert_eq!(ledger.score_of(&p), 3);
        assert_eq!(ledger.len(), 1);
    }
}
