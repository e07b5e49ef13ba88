//! Error types for the bytepair tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// Running out of mergeable pairs during training is not represented here:
/// it shortens the rule table and is reported through the training report.
/// Decoding never fails on malformed UTF-8 either, since invalid byte runs
/// are replaced with U+FFFD.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// A symbol id has no entry in the vocabulary
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(u32),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Merge rule table is inconsistent
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizerError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_symbol_message() {
        let err = TokenizerError::UnknownSymbol(9000);
        assert_eq!(err.to_string(), "Unknown symbol: 9000");
    }

    #[test]
    fn test_io_keeps_path() {
        let err = TokenizerError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/missing.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
