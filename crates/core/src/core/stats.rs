//! Adjacent pair statistics.
//!
//! Counts how often each ordered pair of neighbouring symbols occurs in a
//! token sequence. Overlapping occurrences are counted independently, so
//! `[a, a, a]` contributes two `(a, a)` pairs.

use crate::core::merges::{Pair, Symbol};
use ahash::AHashMap;
use rayon::prelude::*;

/// Pair -> number of adjacent occurrences.
pub type PairCounts = AHashMap<Pair, u64>;

/// Minimum sequence length before parallel counting is worth the overhead.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Count all adjacent pairs sequentially.
///
/// Sequences shorter than two symbols yield an empty map.
pub fn count_pairs(sequence: &[Symbol]) -> PairCounts {
    let mut pair_counts = PairCounts::new();

    for window in sequence.windows(2) {
        *pair_counts.entry((window[0], window[1])).or_insert(0) += 1;
    }

    pair_counts
}

/// Count all adjacent pairs in parallel.
///
/// Works over the width-2 windows of the whole slice rather than over
/// disjoint chunks, so pairs straddling a shard boundary are still seen
/// exactly once and the result always equals [`count_pairs`].
pub fn count_pairs_parallel(sequence: &[Symbol]) -> PairCounts {
    sequence
        .par_windows(2)
        .fold(PairCounts::new, |mut acc, window| {
            *acc.entry((window[0], window[1])).or_insert(0) += 1;
            acc
        })
        .reduce(PairCounts::new, |mut acc, pair_counts| {
            for (pair, count) in pair_counts {
                *acc.entry(pair).or_insert(0) += count;
            }
            acc
        })
}

/// Count pairs, going parallel only when asked to and the input is large.
pub fn count_pairs_with(sequence: &[Symbol], parallel: bool) -> PairCounts {
    if parallel && sequence.len() >= PARALLEL_THRESHOLD {
        count_pairs_parallel(sequence)
    } else {
        count_pairs(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single() {
        assert!(count_pairs(&[]).is_empty());
        assert!(count_pairs(&[42]).is_empty());
    }

    #[test]
    fn test_overlapping_pairs() {
        let pairs = count_pairs(&[7, 7, 7]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.get(&(7, 7)), Some(&2));
    }

    #[test]
    fn test_ordered_pairs() {
        // "ababc"
        let pairs = count_pairs(&[97, 98, 97, 98, 99]);
        assert_eq!(pairs.get(&(97, 98)), Some(&2));
        assert_eq!(pairs.get(&(98, 97)), Some(&1));
        assert_eq!(pairs.get(&(98, 99)), Some(&1));
        assert_eq!(pairs.get(&(99, 98)), None);
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequence: Vec<Symbol> = (0..50_000u32).map(|i| (i * 31 + i / 7) % 13).collect();

        let sequential = count_pairs(&sequence);
        let parallel = count_pairs_parallel(&sequence);

        assert_eq!(sequential, parallel);
        let total: u64 = parallel.values().sum();
        assert_eq!(total, sequence.len() as u64 - 1);
    }

    #[test]
    fn test_parallel_small_inputs() {
        assert!(count_pairs_parallel(&[]).is_empty());
        assert!(count_pairs_parallel(&[1]).is_empty());
        assert_eq!(count_pairs_parallel(&[1, 2]).get(&(1, 2)), Some(&1));
    }

    #[test]
    fn test_count_pairs_with_dispatch() {
        let sequence = [1, 2, 1, 2];
        assert_eq!(count_pairs_with(&sequence, true), count_pairs(&sequence));
        assert_eq!(count_pairs_with(&sequence, false), count_pairs(&sequence));
    }
}
