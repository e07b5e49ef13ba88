//! Merge rule management for byte-level BPE.
//!
//! A merge rule maps an ordered pair of symbols to a freshly minted symbol.
//! Rules are kept in the order they were learned; the symbol minted by the
//! rule of rank `k` is always `BYTE_ALPHABET + k`.

use crate::core::stats::PairCounts;
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;

/// A token identifier: 0-255 for raw bytes, 256 and up for learned merges.
pub type Symbol = u32;

/// An ordered pair of adjacent symbols.
pub type Pair = (Symbol, Symbol);

/// Number of base symbols (one per byte value).
pub const BYTE_ALPHABET: u32 = 256;

/// Ordered collection of merge rules with O(1) pair lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeRules {
    /// Pairs in learning order; index = rank
    order: Vec<Pair>,
    /// Pair -> minted symbol
    lookup: AHashMap<Pair, Symbol>,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new collection with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            lookup: AHashMap::with_capacity(capacity),
        }
    }

    /// Record the next merge rule and return the symbol it mints.
    ///
    /// Both members of `pair` must already be defined and the pair must not
    /// have been recorded before.
    pub fn add_merge(&mut self, pair: Pair) -> Result<Symbol> {
        let new_id = self.next_symbol();

        if pair.0 >= new_id || pair.1 >= new_id {
            return Err(TokenizerError::InvalidMerge(format!(
                "rule {} -> {} refers to a symbol that is not defined yet",
                display_pair(pair),
                new_id
            )));
        }
        if let Some(&existing) = self.lookup.get(&pair) {
            return Err(TokenizerError::InvalidMerge(format!(
                "pair {} is already merged into {}",
                display_pair(pair),
                existing
            )));
        }

        self.order.push(pair);
        self.lookup.insert(pair, new_id);
        Ok(new_id)
    }

    /// Symbol the next recorded rule will mint.
    #[inline]
    pub fn next_symbol(&self) -> Symbol {
        BYTE_ALPHABET + self.order.len() as u32
    }

    /// Get the symbol a pair merges into, if a rule exists.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<Symbol> {
        self.lookup.get(&pair).copied()
    }

    /// Get the 0-based learning rank of a pair's rule.
    #[inline]
    pub fn rank(&self, pair: Pair) -> Option<u32> {
        self.get(pair).map(|id| id - BYTE_ALPHABET)
    }

    /// Get the pair that produced a learned symbol.
    pub fn pair_for(&self, symbol: Symbol) -> Option<Pair> {
        let rank = symbol.checked_sub(BYTE_ALPHABET)?;
        self.order.get(rank as usize).copied()
    }

    /// Among the counted pairs, find the one whose rule was learned first.
    ///
    /// Pairs without a rule are ignored. Returns `None` when no counted pair
    /// is mergeable.
    pub fn earliest_applicable(&self, pair_counts: &PairCounts) -> Option<(Pair, Symbol)> {
        pair_counts
            .keys()
            .filter_map(|&pair| self.get(pair).map(|id| (pair, id)))
            .min_by_key(|&(_, id)| id)
    }

    /// Iterate over `(pair, new_symbol)` in learning order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, Symbol)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(rank, &pair)| (pair, BYTE_ALPHABET + rank as u32))
    }

    /// Pairs in learning order.
    pub fn pairs(&self) -> &[Pair] {
        &self.order
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Create merge rules from a list of pairs.
    ///
    /// The pairs are assigned ranks in order (0, 1, 2, ...) and validated
    /// exactly as [`MergeRules::add_merge`] does.
    pub fn from_pairs(pairs: impl IntoIterator<Item = Pair>) -> Result<Self> {
        let mut rules = Self::new();

        for pair in pairs {
            rules.add_merge(pair)?;
        }

        Ok(rules)
    }
}

/// Replace every non-overlapping occurrence of `pair`, scanning left to right.
///
/// Once positions `i, i+1` are consumed by a match, position `i+1` cannot
/// start another one: `[a, a, a]` merged on `(a, a)` gives `[c, a]`.
pub fn apply_merge(sequence: &[Symbol], pair: Pair, new_id: Symbol) -> Vec<Symbol> {
    let mut merged = Vec::with_capacity(sequence.len());
    let mut i = 0;

    while i < sequence.len() {
        if i + 1 < sequence.len() && sequence[i] == pair.0 && sequence[i + 1] == pair.1 {
            merged.push(new_id);
            i += 2;
        } else {
            merged.push(sequence[i]);
            i += 1;
        }
    }

    merged
}

fn display_pair(pair: Pair) -> String {
    format!("({}, {})", pair.0, pair.1)
}
