//! Vocabulary storage and lookup.
//!
//! The vocabulary resolves every symbol to the raw bytes it stands for. It is
//! an arena indexed by symbol: entries 0-255 hold single bytes and every
//! learned symbol holds the concatenation of its pair's entries, computed
//! once in rule order.

use crate::core::merges::{MergeRules, Symbol, BYTE_ALPHABET};
use crate::error::{Result, TokenizerError};

/// Symbol -> byte sequence resolution table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Resolved bytes, indexed by symbol
    entries: Vec<Vec<u8>>,
}

impl Vocabulary {
    /// Create a vocabulary holding only the 256 byte symbols.
    pub fn bytes_only() -> Self {
        Self::with_capacity(BYTE_ALPHABET as usize)
    }

    /// Create a byte-only vocabulary with room for `capacity` symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity.max(BYTE_ALPHABET as usize));
        entries.extend((0..=u8::MAX).map(|b| vec![b]));
        Self { entries }
    }

    /// Derive the vocabulary from a rule table.
    ///
    /// Rules are walked in learning order, so both halves of each pair are
    /// already resolved when the merged symbol is computed.
    pub fn from_merges(merges: &MergeRules) -> Result<Self> {
        let mut vocab = Self::with_capacity(BYTE_ALPHABET as usize + merges.len());

        for (pair, new_id) in merges.iter() {
            vocab.push_merge(pair.0, pair.1, new_id)?;
        }

        Ok(vocab)
    }

    /// Append the entry for `new_id = left ++ right`.
    fn push_merge(&mut self, left: Symbol, right: Symbol, new_id: Symbol) -> Result<()> {
        if new_id as usize != self.entries.len() {
            return Err(TokenizerError::InvalidMerge(format!(
                "symbol {} is out of order (expected {})",
                new_id,
                self.entries.len()
            )));
        }

        let left = self.get(left).ok_or(TokenizerError::UnknownSymbol(left))?;
        let right = self.get(right).ok_or(TokenizerError::UnknownSymbol(right))?;

        let mut bytes = Vec::with_capacity(left.len() + right.len());
        bytes.extend_from_slice(left);
        bytes.extend_from_slice(right);
        self.entries.push(bytes);

        Ok(())
    }

    /// Get the bytes for a symbol.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<&[u8]> {
        self.entries.get(symbol as usize).map(Vec::as_slice)
    }

    /// Concatenate the bytes of every symbol in order.
    ///
    /// Fails on the first symbol without an entry.
    pub fn decode_bytes(&self, ids: &[Symbol]) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(ids.len() * 2);

        for &id in ids {
            let token = self.get(id).ok_or(TokenizerError::UnknownSymbol(id))?;
            bytes.extend_from_slice(token);
        }

        Ok(bytes)
    }

    /// Iterate over `(symbol, bytes)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[u8])> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(id, bytes)| (id as Symbol, bytes.as_slice()))
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the byte symbols are present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::bytes_only()
    }
}

/// Convert bytes to text, substituting invalid UTF-8.
///
/// Each maximal invalid subsequence becomes one U+FFFD, following the
/// WHATWG/Unicode "substitution of maximal subparts" policy.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
