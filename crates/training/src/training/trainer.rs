//! BPE trainer implementation.
//!
//! Learns merge rules from a single text by repeatedly merging the most
//! frequent adjacent pair of the working sequence. Pair statistics are
//! recomputed from scratch every iteration.

use bytepair_core::{
    apply_merge, count_pairs_with, MergeCandidate, MergeRules, Pair, PairCounts, Result, Symbol,
    TokenizerError, Vocabulary, BYTE_ALPHABET,
};

/// Configuration for BPE training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Target vocabulary size, byte symbols included
    pub vocab_size: usize,
    /// Whether to count pairs in parallel on large inputs
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: 276,
            parallel: false,
        }
    }
}

impl TrainingConfig {
    /// Check that the vocabulary size covers the byte alphabet and fits the
    /// symbol space.
    pub fn validate(&self) -> Result<()> {
        if self.vocab_size < BYTE_ALPHABET as usize {
            return Err(TokenizerError::InvalidConfig(format!(
                "vocab_size must be at least {} (got {})",
                BYTE_ALPHABET, self.vocab_size
            )));
        }
        if Symbol::try_from(self.vocab_size).is_err() {
            return Err(TokenizerError::InvalidConfig(format!(
                "vocab_size {} does not fit in a {}-bit symbol",
                self.vocab_size,
                Symbol::BITS
            )));
        }
        Ok(())
    }

    /// Number of merges needed to reach the target vocabulary size.
    pub fn num_merges(&self) -> usize {
        self.vocab_size.saturating_sub(BYTE_ALPHABET as usize)
    }
}

/// One learned merge, as observed while training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeStep {
    /// The merged pair
    pub pair: Pair,
    /// Symbol minted for it
    pub new_id: Symbol,
    /// Occurrences of the pair when it was selected
    pub count: u64,
    /// Working sequence length after the merge
    pub len_after: usize,
}

/// Summary of a training run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingReport {
    /// Working sequence length before any merge (UTF-8 byte count)
    pub initial_len: usize,
    /// Working sequence length after the last merge
    pub final_len: usize,
    /// Every merge, in learning order
    pub steps: Vec<MergeStep>,
    /// Training ran out of pairs before reaching the target size
    pub exhausted: bool,
}

impl TrainingReport {
    /// Ratio of initial to final sequence length.
    pub fn compression_ratio(&self) -> f64 {
        if self.final_len == 0 {
            1.0
        } else {
            self.initial_len as f64 / self.final_len as f64
        }
    }
}

/// Everything a training run produces.
#[derive(Debug, Clone)]
pub struct TrainingOutput {
    /// Learned rules in learning order
    pub merges: MergeRules,
    /// Vocabulary derived from `merges`
    pub vocab: Vocabulary,
    /// Run statistics
    pub report: TrainingReport,
}

/// Select the pair to merge next: highest count, smallest pair on ties.
///
/// Returns `None` only when there are no pairs at all.
pub fn select_best_pair(pair_counts: &PairCounts) -> Option<MergeCandidate> {
    MergeCandidate::best(pair_counts)
}

/// Train on `text` until the vocabulary reaches `vocab_size` symbols or no
/// pair is left to merge.
pub fn train(text: &str, vocab_size: usize) -> Result<(MergeRules, Vocabulary)> {
    let output = BpeTrainer::with_vocab_size(vocab_size).train(text)?;
    Ok((output.merges, output.vocab))
}

/// BPE trainer.
///
/// Trains a byte-level BPE model from text by iteratively merging the most
/// frequent adjacent symbol pair.
#[derive(Debug, Clone, Default)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer with default configuration.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig {
            vocab_size,
            ..Default::default()
        })
    }

    /// The trainer's configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on the given text.
    ///
    /// Running out of pairs is not an error: the rule table is simply
    /// shorter than requested and `report.exhausted` is set.
    pub fn train(&self, text: &str) -> Result<TrainingOutput> {
        self.config.validate()?;

        let num_merges = self.config.num_merges();
        let mut ids: Vec<Symbol> = text.bytes().map(Symbol::from).collect();
        // Each merge shortens the sequence by at least one symbol
        let max_merges = num_merges.min(ids.len().saturating_sub(1));
        let mut merges = MergeRules::with_capacity(max_merges);
        let mut report = TrainingReport {
            initial_len: ids.len(),
            steps: Vec::with_capacity(max_merges),
            ..Default::default()
        };

        log::info!(
            "training: {} bytes, {} merges to learn (parallel={})",
            ids.len(),
            num_merges,
            self.config.parallel
        );

        for _ in 0..num_merges {
            let pair_counts = count_pairs_with(&ids, self.config.parallel);

            let Some(candidate) = select_best_pair(&pair_counts) else {
                report.exhausted = true;
                log::info!(
                    "training: no pairs left after {} merges, stopping early",
                    merges.len()
                );
                break;
            };

            let new_id = merges.add_merge(candidate.pair)?;
            ids = apply_merge(&ids, candidate.pair, new_id);

            log::debug!(
                "merging ({}, {}) x{} into a new token {} (len {})",
                candidate.pair.0,
                candidate.pair.1,
                candidate.count,
                new_id,
                ids.len()
            );

            report.steps.push(MergeStep {
                pair: candidate.pair,
                new_id,
                count: candidate.count,
                len_after: ids.len(),
            });
        }

        report.final_len = ids.len();
        let vocab = Vocabulary::from_merges(&merges)?;

        log::info!(
            "training: done, {} merges, {} -> {} symbols (compression {:.3})",
            merges.len(),
            report.initial_len,
            report.final_len,
            report.compression_ratio()
        );

        Ok(TrainingOutput {
            merges,
            vocab,
            report,
        })
    }
}
