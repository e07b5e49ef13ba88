//! Encoding strategies for BPE tokenization.
//!
//! Only byte-level encoding is provided: all text is treated as UTF-8 bytes
//! and merges operate on byte symbols.

pub mod byte_level;

pub use byte_level::ByteLevelEncoder;
