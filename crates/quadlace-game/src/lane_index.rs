//! Cached per-lane records of filled cells.
//!
//! The engine keeps one [`LaneIndex`] for rows and one for columns so that
//! duplicate checks scan at most 4 records instead of the whole board. The
//! caches are derived data: the board is the source of truth, and the engine
//! inserts and removes entries in the same call as every board write.

use quadlace_core::{Digit, Position};

/// A single cached record: a digit and the position holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    /// The digit stored at `position`.
    pub digit: Digit,
    /// The position of the filled cell.
    pub position: Position,
}

/// Filled-cell records for the four lanes of one orientation (all rows, or
/// all columns).
///
/// Buckets hold at most 4 entries and at most one entry per position, so
/// lookups are plain linear scans on purpose; at this scale a hashed or
/// sorted structure buys nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneIndex {
    buckets: [Vec<IndexEntry>; 4],
}

impl LaneIndex {
    /// Creates an index with all buckets empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `digit` at `position` in the bucket for `lane`.
    ///
    /// The caller must not insert a second entry for the same position;
    /// replacements remove the stale entry first.
    pub fn insert(&mut self, lane: u8, digit: Digit, position: Position) {
        debug_assert!(
            self.bucket(lane)
                .iter()
                .all(|entry| entry.position != position)
        );
        self.buckets[usize::from(lane)].push(IndexEntry { digit, position });
    }

    /// Removes the entry for `position` from the bucket for `lane`, if
    /// present.
    pub fn remove(&mut self, lane: u8, position: Position) {
        self.buckets[usize::from(lane)].retain(|entry| entry.position != position);
    }

    /// Returns the entries currently cached for `lane`.
    #[must_use]
    pub fn bucket(&self, lane: u8) -> &[IndexEntry] {
        &self.buckets[usize::from(lane)]
    }

    /// Returns the number of filled cells cached for `lane`.
    #[must_use]
    pub fn len(&self, lane: u8) -> usize {
        self.buckets[usize::from(lane)].len()
    }
}
