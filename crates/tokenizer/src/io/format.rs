//! Format definitions for tokenizer serialization.
//!
//! A trained tokenizer is fully described by its merge rules, so that is all
//! that gets written; the vocabulary is re-derived on load.

use serde::{Deserialize, Serialize};

/// File name used inside a tokenizer directory.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// Merge rule for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedMerge {
    /// The pair of symbols being merged
    pub pair: (u32, u32),
    /// The symbol created by this merge
    pub new_id: u32,
}

/// Complete tokenizer serialization format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedTokenizer {
    /// Version of the crate that wrote the file
    pub version: String,
    /// Total number of symbols, bytes included
    pub vocab_size: usize,
    /// Merge rules in learning order
    pub merges: Vec<SerializedMerge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let data = SerializedTokenizer {
            version: "0.1.0".to_string(),
            vocab_size: 257,
            merges: vec![SerializedMerge {
                pair: (97, 98),
                new_id: 256,
            }],
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["vocab_size"], 257);
        assert_eq!(json["merges"][0]["pair"], serde_json::json!([97, 98]));
        assert_eq!(json["merges"][0]["new_id"], 256);

        let back: SerializedTokenizer = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
