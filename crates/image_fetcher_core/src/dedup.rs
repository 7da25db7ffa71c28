use std::collections::HashSet;

use crate::ContentHash;

/// Content hashes already written to disk during the current run.
///
/// A hash is only recorded after its bytes were persisted, so membership
/// means "this content already has a file".
#[derive(Debug, Clone, Default)]
pub struct DedupSet {
    seen: HashSet<ContentHash>,
}

impl DedupSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, hash: &ContentHash) -> bool {
        self.seen.contains(hash)
    }

    /// Records a persisted hash. Returns `false` if it was already present.
    pub fn record(&mut self, hash: ContentHash) -> bool {
        self.seen.insert(hash)
    }

    /// Number of distinct images stored so far.
    pub fn stored_count(&self) -> usize {
        self.seen.len()
    }
}
