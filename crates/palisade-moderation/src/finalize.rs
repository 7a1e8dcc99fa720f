// crates/palisade-moderation/src/finalize.rs
//
// Finalization resolver: applies the moderation decision rule once the
// voting window has closed.
//
// Any caller may finalize; the outcome depends only on the record's own
// tallies. A record is finalized exactly once.

use palisade_core::{ContentId, ContentStatus, PalisadeError};

use crate::registry::ContentRegistry;

/// The decision rule: strictly more votes for than against approves;
/// anything else, including a tie and a zero-vote record, rejects.
pub fn decide_outcome(votes_for: u64, votes_against: u64) -> ContentStatus {
    if votes_for > votes_against {
        ContentStatus::Approved
    } else {
        ContentStatus::Rejected
    }
}

/// Finalize a record at `height` and return the final status.
///
/// Fails with `ContentNotFound` for an unknown id and `NotAuthorized`
/// both before `voting_ends_at` and for a record that is no longer
/// pending. At exactly `voting_ends_at` finalization succeeds.
pub fn finalize_content(
    registry: &mut ContentRegistry,
    content_id: ContentId,
    height: u64,
) -> Result<ContentStatus, PalisadeError> {
    let record = registry
        .get_mut(content_id)
        .ok_or(PalisadeError::ContentNotFound(content_id))?;
    if height < record.voting_ends_at {
        return Err(PalisadeError::NotAuthorized);
    }
    if !record.is_pending() {
        return Err(PalisadeError::NotAuthorized);
    }
    let status = decide_outcome(record.votes_for, record.votes_against);
    record.status = status;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palisade_core::{ContentHash, Principal};

    use crate::registry::VOTING_PERIOD;

    fn submit_at(height: u64) -> (ContentRegistry, ContentId) {
        let mut registry = ContentRegistry::new();
        let id = registry.submit(
            Principal::from_bytes([1u8; 32]),
            ContentHash::from_bytes([0xaa; 32]),
            height,
        );
        (registry, id)
    }

    #[test]
    fn test_decide_outcome() {
        assert_eq!(decide_outcome(3, 2), ContentStatus::Approved);
        assert_eq!(decide_outcome(2, 2), ContentStatus::Rejected);
        assert_eq!(decide_outcome(0, 0), ContentStatus::Rejected);
        assert_eq!(decide_outcome(0, 5), ContentStatus::Rejected);
        assert_eq!(decide_outcome(1, 0), ContentStatus::Approved);
    }

    #[test]
    fn test_too_early_fails() {
        let (mut registry, id) = submit_at(100);
        let err = finalize_content(&mut registry, id, 100 + VOTING_PERIOD - 1).unwrap_err();
        assert!(matches!(err, PalisadeError::NotAuthorized));
        assert_eq!(registry.get(id).unwrap().status, ContentStatus::Pending);
    }

    #[test]
    fn test_finalizable_at_exact_window_end() {
        let (mut registry, id) = submit_at(100);
        let status = finalize_content(&mut registry, id, 100 + VOTING_PERIOD).unwrap();
        assert_eq!(status, ContentStatus::Rejected);
        assert_eq!(registry.get(id).unwrap().status, ContentStatus::Rejected);
    }

    #[test]
    fn test_unknown_content() {
        let mut registry = ContentRegistry::new();
        let err = finalize_content(&mut registry, 7, 1_000).unwrap_err();
        assert!(matches!(err, PalisadeError::ContentNotFound(7)));
    }

    #[test]
    fn test_tallies_decide() {
        let (mut registry, id) = submit_at(100);
        {
            let record = registry.get_mut(id).unwrap();
            record.votes_for = 3;
            record.votes_against = 2;
        }
        let status = finalize_content(&mut registry, id, 100 + VOTING_PERIOD).unwrap();
        assert_eq!(status, ContentStatus::Approved);
    }

    #[test]
    fn test_refinalization_refused() {
        let (mut registry, id) = submit_at(100);
        {
            let record = registry.get_mut(id).unwrap();
            record.votes_for = 1;
        }
        let first = finalize_content(&mut registry, id, 100 + VOTING_PERIOD).unwrap();
        assert_eq!(first, ContentStatus::Approved);

        let err = finalize_content(&mut registry, id, 100 + VOTING_PERIOD + 50).unwrap_err();
        assert!(matches!(err, PalisadeError::NotAuthorized));
        // Stored status untouched.
        assert_eq!(registry.get(id).unwrap().status, ContentStatus::Approved);
    }
}
