// crates/palisade-moderation/src/registry.rs
//
// Content registry: id assignment and record storage.
//
// Ids are sequential from 1 in submission order. The registry stamps the
// voting window at submission; every record is finalizable exactly
// VOTING_PERIOD blocks after it was created.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use palisade_core::{ContentHash, ContentId, ContentRecord, ContentStatus, Principal};

/// Length of the voting window in blocks. A record created at height H
/// accepts votes at heights [H, H + VOTING_PERIOD) and becomes
/// finalizable at H + VOTING_PERIOD.
pub const VOTING_PERIOD: u64 = 144;

/// Registry of submitted content records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRegistry {
    /// Next id to assign. Starts at 1; id 0 is never assigned.
    next_id: ContentId,
    /// All records, keyed by id.
    contents: HashMap<ContentId, ContentRecord>,
}

impl ContentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            contents: HashMap::new(),
        }
    }

    /// Submit content and return its assigned id. Never fails: any
    /// caller may submit, and duplicate hashes receive distinct ids.
    pub fn submit(&mut self, author: Principal, content_hash: ContentHash, height: u64) -> ContentId {
        let id = self.next_id;
        self.next_id += 1;
        self.contents.insert(
            id,
            ContentRecord {
                id,
                author,
                content_hash,
                status: ContentStatus::Pending,
                created_at: height,
                votes_for: 0,
                votes_against: 0,
                voting_ends_at: height + VOTING_PERIOD,
            },
        );
        id
    }

    /// Look up a record by id.
    pub fn get(&self, id: ContentId) -> Option<&ContentRecord> {
        self.contents.get(&id)
    }

    /// Mutable lookup for the voting engine and finalization resolver.
    /// Crate-internal so tallies and status have no writers outside this
    /// crate.
    pub(crate) fn get_mut(&mut self, id: ContentId) -> Option<&mut ContentRecord> {
        self.contents.get_mut(&id)
    }

    /// Snapshot of records, optionally filtered by status, ordered by id.
    pub fn list(&self, status: Option<ContentStatus>) -> Vec<ContentRecord> {
        let mut records: Vec<ContentRecord> = self
            .contents
            .values()
            .filter(|r| status.map_or(true, |s| r.status == s))
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }

    /// Number of records ever submitted.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Principal {
        Principal::from_bytes([1u8; 32])
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut registry = ContentRegistry::new();
        let a = registry.submit(author(), ContentHash::from_bytes([0xaa; 32]), 100);
        let b = registry.submit(author(), ContentHash::from_bytes([0xbb; 32]), 100);
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn test_new_record_shape() {
        let mut registry = ContentRegistry::new();
        let id = registry.submit(author(), ContentHash::from_bytes([0xaa; 32]), 500);
        let record = registry.get(id).unwrap();
        assert_eq!(record.status, ContentStatus::Pending);
        assert_eq!(record.votes_for, 0);
        assert_eq!(record.votes_against, 0);
        assert_eq!(record.created_at, 500);
        assert_eq!(record.voting_ends_at, 500 + VOTING_PERIOD);
    }

    #[test]
    fn test_duplicate_hashes_get_distinct_ids() {
        let mut registry = ContentRegistry::new();
        let hash = ContentHash::from_bytes([0xcc; 32]);
        let a = registry.submit(author(), hash, 10);
        let b = registry.submit(author(), hash, 11);
        assert_ne!(a, b);
        assert_eq!(registry.get(a).unwrap().content_hash, hash);
        assert_eq!(registry.get(b).unwrap().content_hash, hash);
    }

    #[test]
    fn test_get_unknown_id() {
        let registry = ContentRegistry::new();
        assert!(registry.get(1).is_none());
        assert!(registry.get(0).is_none());
    }

    #[test]
    fn test_list_filters_and_orders() {
        let mut registry = ContentRegistry::new();
        for i in 0..3 {
            registry.submit(author(), ContentHash::from_bytes([i; 32]), 10);
        }
        // Finalize record 2 by hand through the crate-internal path.
        registry.get_mut(2).unwrap().status = ContentStatus::Approved;

        let all = registry.list(None);
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);

        let pending = registry.list(Some(ContentStatus::Pending));
        assert_eq!(pending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);

        let approved = registry.list(Some(ContentStatus::Approved));
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, 2);
    }
}
