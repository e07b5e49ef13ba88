//! bytepair-training - BPE training infrastructure
//!
//! This crate learns byte-level BPE merge rules from text data.
//!
//! # Features
//!
//! - Deterministic merge selection (highest count, smallest pair on ties)
//! - Optional parallel pair counting for large corpora
//! - Per-merge training report with compression statistics
//!
//! # Example
//!
//! ```rust
//! use bytepair_training::{BpeTrainer, TrainingConfig};
//!
//! let trainer = BpeTrainer::new(TrainingConfig {
//!     vocab_size: 257,
//!     ..Default::default()
//! });
//! let output = trainer.train("ababc")?;
//!
//! assert_eq!(output.merges.get((97, 98)), Some(256));
//! assert_eq!(output.report.final_len, 3);
//! # Ok::<(), bytepair_training::TokenizerError>(())
//! ```

pub use bytepair_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    select_best_pair, train, BpeTrainer, MergeStep, TrainingConfig, TrainingOutput,
    TrainingReport,
};
