//! bytepair-core - Core byte-level BPE implementation
//!
//! This crate provides the fundamental data structures and algorithms for
//! byte-pair encoding (BPE) over UTF-8 bytes.
//!
//! # Features
//!
//! - Adjacent pair statistics, sequential or parallel (rayon)
//! - Ordered merge rules with `AHashMap` lookup
//! - Arena vocabulary resolving every symbol to its bytes
//! - Byte-level encoder/decoder with lossy UTF-8 output
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::{ByteLevelEncoder, MergeRules};
//!
//! let merges = MergeRules::from_pairs(vec![(b'a' as u32, b'b' as u32)])?;
//! let encoder = ByteLevelEncoder::new(merges)?;
//!
//! let ids = encoder.encode("abab");
//! assert_eq!(ids, vec![256, 256]);
//! assert_eq!(encoder.decode(&ids)?, "abab");
//! # Ok::<(), bytepair_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE algorithm modules
pub mod core;
pub use crate::core::{
    apply_merge, count_pairs, count_pairs_parallel, count_pairs_with, decode_lossy,
    MergeCandidate, MergeRules, Pair, PairCounts, Symbol, Vocabulary, BYTE_ALPHABET,
};

// Encoding modes
pub mod encoding;
pub use encoding::ByteLevelEncoder;
