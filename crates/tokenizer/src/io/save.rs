//! Save functionality for trained tokenizers.

use super::format::{SerializedMerge, SerializedTokenizer, TOKENIZER_FILE};
use bytepair_core::{MergeRules, Result, TokenizerError, BYTE_ALPHABET};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    /// Merge rules reference
    merges: &'a MergeRules,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(merges: &'a MergeRules) -> Self {
        Self { merges }
    }

    /// Save the tokenizer to a directory.
    ///
    /// Creates the directory if needed and writes a single `tokenizer.json`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| TokenizerError::io(path, e))?;

        let file_path = path.join(TOKENIZER_FILE);
        let file = File::create(&file_path).map_err(|e| TokenizerError::io(&file_path, e))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.serialize())?;
        writer
            .flush()
            .map_err(|e| TokenizerError::io(&file_path, e))?;

        log::debug!(
            "saved {} merge rules to {}",
            self.merges.len(),
            file_path.display()
        );
        Ok(())
    }

    /// Serialize the tokenizer to a structure.
    pub fn serialize(&self) -> SerializedTokenizer {
        let merges = self
            .merges
            .iter()
            .map(|(pair, new_id)| SerializedMerge { pair, new_id })
            .collect();

        SerializedTokenizer {
            version: env!("CARGO_PKG_VERSION").to_string(),
            vocab_size: BYTE_ALPHABET as usize + self.merges.len(),
            merges,
        }
    }
}
