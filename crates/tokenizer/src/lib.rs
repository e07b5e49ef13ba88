//! bytepair-tokenizer - High-level tokenizer API
//!
//! This crate provides a user-friendly interface for byte-level BPE,
//! integrating training, the learned merge rules and the encoder into a
//! single API.
//!
//! # Features
//!
//! - Builder for training configuration
//! - Deterministic encode, lossy decode, parallel batch encoding
//! - Saving and loading trained models as JSON
//!
//! # Example
//!
//! ```rust
//! use bytepair_tokenizer::Tokenizer;
//!
//! // Train a tokenizer with 4 merges on top of the byte alphabet
//! let tokenizer = Tokenizer::builder()
//!     .vocab_size(260)
//!     .train("low lower lowest")?;
//!
//! // Encode text
//! let ids = tokenizer.encode("lowest");
//! assert!(ids.len() < "lowest".len());
//!
//! // Decode tokens
//! assert_eq!(tokenizer.decode(&ids)?, "lowest");
//! # Ok::<(), bytepair_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use bytepair_core::{MergeRules, Result, Symbol, TokenizerError, Vocabulary};
pub use bytepair_training::{MergeStep, TrainingConfig, TrainingReport};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, Tokenizer, TokenizerBuilder};

// IO/Serialization
pub mod io;
pub use io::{TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
