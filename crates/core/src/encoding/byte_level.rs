//! Byte-level BPE encoding.
//!
//! Text is encoded as its UTF-8 bytes, one symbol per byte, and learned
//! merges are then applied in the order they were learned. Decoding looks
//! every symbol up in the vocabulary and converts the concatenated bytes
//! back to text, substituting invalid UTF-8.

use crate::core::{apply_merge, count_pairs, decode_lossy, MergeRules, Symbol, Vocabulary};
use crate::Result;
use std::sync::Arc;

/// Byte-level BPE encoder over an immutable rule table.
///
/// Rules and vocabulary sit behind `Arc`s, so cloning the encoder or handing
/// it to other threads never copies the tables.
#[derive(Debug, Clone)]
pub struct ByteLevelEncoder {
    /// Merge rules: pair -> minted symbol, in learning order
    merges: Arc<MergeRules>,
    /// Symbol -> bytes
    vocab: Arc<Vocabulary>,
}

impl ByteLevelEncoder {
    /// Create an encoder, deriving the vocabulary from the rules.
    pub fn new(merges: MergeRules) -> Result<Self> {
        let vocab = Vocabulary::from_merges(&merges)?;
        Ok(Self::with_arcs(Arc::new(merges), Arc::new(vocab)))
    }

    /// Create an encoder from tables that are already shared.
    ///
    /// `vocab` must be the vocabulary derived from `merges`.
    pub fn with_arcs(merges: Arc<MergeRules>, vocab: Arc<Vocabulary>) -> Self {
        Self { merges, vocab }
    }

    /// Encode text into symbols.
    pub fn encode(&self, text: &str) -> Vec<Symbol> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encode raw bytes into symbols.
    ///
    /// Each round merges the applicable pair with the lowest learned id, so a
    /// rule consuming a learned symbol never fires before the rule that
    /// produces that symbol.
    pub fn encode_bytes(&self, bytes: &[u8]) -> Vec<Symbol> {
        let mut tokens: Vec<Symbol> = bytes.iter().map(|&b| Symbol::from(b)).collect();

        while tokens.len() >= 2 {
            let pair_counts = count_pairs(&tokens);

            let Some((pair, new_id)) = self.merges.earliest_applicable(&pair_counts) else {
                break;
            };

            log::trace!("encode: applying ({}, {}) -> {}", pair.0, pair.1, new_id);
            tokens = apply_merge(&tokens, pair, new_id);
        }

        tokens
    }

    /// Decode symbols to raw bytes.
    pub fn decode_bytes(&self, ids: &[Symbol]) -> Result<Vec<u8>> {
        self.vocab.decode_bytes(ids)
    }

    /// Decode symbols back to text.
    ///
    /// Unknown symbols are an error; invalid UTF-8 in the concatenated bytes
    /// is replaced with U+FFFD.
    pub fn decode(&self, ids: &[Symbol]) -> Result<String> {
        let bytes = self.decode_bytes(ids)?;
        Ok(decode_lossy(&bytes))
    }

    /// Shared rule table.
    pub fn merges(&self) -> &Arc<MergeRules> {
        &self.merges
    }

    /// Shared vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenizerError;

    fn encoder(pairs: Vec<(u32, u32)>) -> ByteLevelEncoder {
        ByteLevelEncoder::new(MergeRules::from_pairs(pairs).unwrap()).unwrap()
    }

    #[test]
    fn test_encode_without_merges_is_bytes() {
        let encoder = encoder(vec![]);
        assert_eq!(encoder.encode("hi!"), vec![104, 105, 33]);
        assert!(encoder.encode("").is_empty());
        assert_eq!(encoder.encode("é"), vec![0xC3, 0xA9]);
    }

    #[test]
    fn test_encode_simple() {
        // "ab" -> 256, then "ab" "c" -> 257
        let encoder = encoder(vec![(97, 98), (256, 99)]);
        assert_eq!(encoder.encode("abcab"), vec![257, 256]);
    }

    #[test]
    fn test_encode_respects_learning_order() {
        // 256 = "bc", 257 = "ab"; "abc" must become "a" + "bc"
        let encoder = encoder(vec![(98, 99), (97, 98)]);
        assert_eq!(encoder.encode("abc"), vec![97, 256]);

        // Reverse the learning order and the result flips
        let encoder = self::encoder(vec![(97, 98), (98, 99)]);
        assert_eq!(encoder.encode("abc"), vec![256, 99]);
    }

    #[test]
    fn test_encode_builds_dependent_symbols() {
        // 256 = "aa", 257 = "aaaa"
        let encoder = encoder(vec![(97, 97), (256, 256)]);
        assert_eq!(encoder.encode("aaaaa"), vec![257, 97]);
    }

    #[test]
    fn test_encode_stops_when_nothing_applies() {
        let encoder = encoder(vec![(120, 121)]);
        let encoded = encoder.encode("hello");
        assert_eq!(encoded, b"hello".iter().map(|&b| b as u32).collect::<Vec<_>>());

        let merges = encoder.merges();
        let pair_counts = count_pairs(&encoded);
        assert!(merges.earliest_applicable(&pair_counts).is_none());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let encoder = encoder(vec![(108, 108), (104, 101), (257, 256), (111, 32)]);

        for text in ["Hello, world!", "hello hello", "", "Ünïcödé 🅤🅝", "\u{0}\u{7f}"] {
            let encoded = encoder.encode(text);
            assert_eq!(encoder.decode(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn test_decode_unknown_symbol() {
        let encoder = encoder(vec![(97, 98)]);
        assert!(matches!(
            encoder.decode(&[97, 257]),
            Err(TokenizerError::UnknownSymbol(257))
        ));
    }

    #[test]
    fn test_decode_is_lossy() {
        let encoder = encoder(vec![]);
        // Lone continuation byte followed by valid ASCII
        assert_eq!(encoder.decode(&[0x80, 0x61]).unwrap(), "\u{FFFD}a");
        assert_eq!(encoder.decode_bytes(&[0x80, 0x61]).unwrap(), vec![0x80, 0x61]);
    }
}
