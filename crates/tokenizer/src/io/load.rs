//! Load functionality for trained tokenizers.

use super::format::{SerializedTokenizer, TOKENIZER_FILE};
use bytepair_core::{MergeRules, Result, TokenizerError, BYTE_ALPHABET};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load merge rules from a directory containing `tokenizer.json`.
    pub fn load(path: &Path) -> Result<MergeRules> {
        let file_path = path.join(TOKENIZER_FILE);
        let file = File::open(&file_path).map_err(|e| TokenizerError::io(&file_path, e))?;

        let reader = BufReader::new(file);
        let serialized: SerializedTokenizer = serde_json::from_reader(reader)?;

        log::debug!(
            "loading {} merge rules from {} (written by version {})",
            serialized.merges.len(),
            file_path.display(),
            serialized.version
        );
        Self::deserialize(serialized)
    }

    /// Rebuild merge rules from a serialized structure.
    ///
    /// Every rule must mint the id its position implies and may only refer
    /// to symbols defined before it.
    pub fn deserialize(data: SerializedTokenizer) -> Result<MergeRules> {
        let expected_size = BYTE_ALPHABET as usize + data.merges.len();
        if data.vocab_size != expected_size {
            return Err(TokenizerError::InvalidMerge(format!(
                "vocab_size is {} but {} rules imply {}",
                data.vocab_size,
                data.merges.len(),
                expected_size
            )));
        }

        let mut merges = MergeRules::with_capacity(data.merges.len());
        for merge in data.merges {
            let expected = merges.next_symbol();
            if merge.new_id != expected {
                return Err(TokenizerError::InvalidMerge(format!(
                    "rule ({}, {}) mints {} but its position requires {}",
                    merge.pair.0, merge.pair.1, merge.new_id, expected
                )));
            }
            merges.add_merge(merge.pair)?;
        }

        Ok(merges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::format::SerializedMerge;
    use crate::io::save::TokenizerSaver;

    fn serialized(merges: Vec<((u32, u32), u32)>) -> SerializedTokenizer {
        SerializedTokenizer {
            version: "0.1.0".to_string(),
            vocab_size: 256 + merges.len(),
            merges: merges
                .into_iter()
                .map(|(pair, new_id)| SerializedMerge { pair, new_id })
                .collect(),
        }
    }

    #[test]
    fn test_load_roundtrip() {
        let temp_dir = std::env::temp_dir().join(format!(
            "bytepair_test_load_{}",
            std::process::id()
        ));
        let merges = MergeRules::from_pairs(vec![(104, 101), (108, 108), (256, 257)]).unwrap();

        TokenizerSaver::new(&merges).save(&temp_dir).unwrap();
        let loaded = TokenizerLoader::load(&temp_dir).unwrap();

        assert_eq!(loaded, merges);

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let missing = std::env::temp_dir().join("bytepair_test_load_missing_dir");
        assert!(matches!(
            TokenizerLoader::load(&missing),
            Err(TokenizerError::Io { .. })
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let temp_dir = std::env::temp_dir().join(format!(
            "bytepair_test_load_bad_json_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(temp_dir.join(TOKENIZER_FILE), "{ not json").unwrap();

        assert!(matches!(
            TokenizerLoader::load(&temp_dir),
            Err(TokenizerError::Json(_))
        ));

        std::fs::remove_dir_all(temp_dir).ok();
    }

    #[test]
    fn test_rejects_out_of_order_ids() {
        let data = serialized(vec![((1, 2), 257)]);
        assert!(matches!(
            TokenizerLoader::deserialize(data),
            Err(TokenizerError::InvalidMerge(_))
        ));
    }

    #[test]
    fn test_rejects_forward_reference() {
        let data = serialized(vec![((1, 2), 256), ((257, 2), 257)]);
        assert!(matches!(
            TokenizerLoader::deserialize(data),
            Err(TokenizerError::InvalidMerge(_))
        ));
    }

    #[test]
    fn test_rejects_size_mismatch() {
        let mut data = serialized(vec![((1, 2), 256)]);
        data.vocab_size = 300;
        assert!(TokenizerLoader::deserialize(data).is_err());
    }
}
