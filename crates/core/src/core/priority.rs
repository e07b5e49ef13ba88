//! Merge candidate ordering.
//!
//! Training always merges the most frequent pair. Equal counts are resolved
//! in favour of the lexicographically smallest pair, so the learned rules do
//! not depend on hash map iteration order.

use crate::core::merges::Pair;
use crate::core::stats::PairCounts;
use std::cmp::Ordering;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of symbols to merge
    pub pair: Pair,
    /// The frequency/count of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }

    /// Pick the highest priority candidate out of a set of pair counts.
    ///
    /// Returns `None` only when `pair_counts` is empty.
    pub fn best(pair_counts: &PairCounts) -> Option<Self> {
        pair_counts
            .iter()
            .map(|(&pair, &count)| Self::new(pair, count))
            .max()
    }
}

// Higher count wins; on equal counts the smaller pair wins.
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.pair.cmp(&self.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
