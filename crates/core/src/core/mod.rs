//! Core BPE data structures.
//!
//! Pair statistics, merge rules and the vocabulary derived from them,
//! independent of how rules are learned or exposed.

pub mod merges;
pub mod priority;
pub mod stats;
pub mod vocab;

pub use merges::{apply_merge, MergeRules, Pair, Symbol, BYTE_ALPHABET};
pub use priority::MergeCandidate;
pub use stats::{count_pairs, count_pairs_parallel, count_pairs_with, PairCounts};
pub use vocab::{decode_lossy, Vocabulary};
