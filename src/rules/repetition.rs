//! Threefold-repetition tracking.
//!
//! Counts how often each board signature has been reached after a
//! committed move. Counts only ever grow until the tracker is cleared.

use rustc_hash::FxHashMap;

use crate::board::Signature;
use crate::core::REPETITION_LIMIT;

/// Occurrence counts per position signature.
#[derive(Clone, Debug, Default)]
pub struct RepetitionTracker {
    counts: FxHashMap<Signature, u32>,
}

impl RepetitionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `signature`; true once it has been seen
    /// `REPETITION_LIMIT` times.
    pub fn record_and_check(&mut self, signature: Signature) -> bool {
        let count = self.counts.entry(signature).or_insert(0);
        *count += 1;
        *count >= REPETITION_LIMIT
    }

    /// Occurrences recorded so far.
    #[must_use]
    pub fn count(&self, signature: Signature) -> u32 {
        self.counts.get(&signature).copied().unwrap_or(0)
    }

    /// Number of distinct positions seen.
    #[must_use]
    pub fn distinct_positions(&self) -> usize {
        self.counts.len()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
