//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the
//! trainer, the merge rules and the byte-level encoder together.

use crate::io::{TokenizerLoader, TokenizerSaver};
use bytepair_core::{ByteLevelEncoder, MergeRules, Result, Symbol, Vocabulary};
use bytepair_training::{BpeTrainer, TrainingConfig, TrainingReport};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Builder for training a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TrainingConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target vocabulary size (byte symbols included).
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.config.vocab_size = size;
        self
    }

    /// Count pairs in parallel on large training inputs.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Train a tokenizer on `text`.
    pub fn train(self, text: &str) -> Result<Tokenizer> {
        let output = BpeTrainer::new(self.config).train(text)?;

        let encoder =
            ByteLevelEncoder::with_arcs(Arc::new(output.merges), Arc::new(output.vocab));

        Ok(Tokenizer {
            encoder,
            report: Some(output.report),
        })
    }
}

/// Main tokenizer struct.
///
/// Holds immutable, shared merge rules and vocabulary. Cloning is cheap and
/// the tokenizer can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Byte-level encoder over the learned tables
    encoder: ByteLevelEncoder,
    /// Present when this tokenizer was trained in-process
    report: Option<TrainingReport>,
}

impl Tokenizer {
    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Train a tokenizer on `text` with the given target vocabulary size.
    pub fn train(text: &str, vocab_size: usize) -> Result<Self> {
        Self::builder().vocab_size(vocab_size).train(text)
    }

    /// Build a tokenizer from an existing rule table.
    pub fn from_merges(merges: MergeRules) -> Result<Self> {
        Ok(Self {
            encoder: ByteLevelEncoder::new(merges)?,
            report: None,
        })
    }

    /// Encode text to symbol ids.
    pub fn encode(&self, text: &str) -> Vec<Symbol> {
        self.encoder.encode(text)
    }

    /// Encode text, keeping the input alongside the ids.
    pub fn encode_to_encoding(&self, text: &str) -> Encoding {
        Encoding {
            ids: self.encode(text),
            text: text.to_string(),
        }
    }

    /// Encode a batch of texts (parallelized).
    pub fn encode_batch<S>(&self, texts: &[S]) -> Vec<Vec<Symbol>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.encode(text.as_ref()))
            .collect()
    }

    /// Decode symbol ids back to text.
    ///
    /// Fails with `UnknownSymbol` on ids outside the vocabulary; invalid
    /// UTF-8 in the result is replaced with U+FFFD.
    pub fn decode(&self, ids: &[Symbol]) -> Result<String> {
        self.encoder.decode(ids)
    }

    /// Decode symbol ids to raw bytes.
    pub fn decode_bytes(&self, ids: &[Symbol]) -> Result<Vec<u8>> {
        self.encoder.decode_bytes(ids)
    }

    /// Bytes a single symbol stands for.
    pub fn token_bytes(&self, id: Symbol) -> Option<&[u8]> {
        self.encoder.vocab().get(id)
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.encoder.vocab().len()
    }

    /// Get a reference to the merge rules.
    pub fn merges(&self) -> &MergeRules {
        self.encoder.merges()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        self.encoder.vocab()
    }

    /// Training statistics, if this tokenizer was trained in-process.
    pub fn report(&self) -> Option<&TrainingReport> {
        self.report.as_ref()
    }

    /// Save the tokenizer to a directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        TokenizerSaver::new(self.merges()).save(path)
    }

    /// Load a tokenizer from a directory.
    pub fn load(path: &Path) -> Result<Self> {
        let merges = TokenizerLoader::load(path)?;
        Self::from_merges(merges)
    }
}

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Symbol ids
    pub ids: Vec<Symbol>,
    /// Original text
    pub text: String,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
