//! Serialization and deserialization for trained tokenizers.
//!
//! Models are stored as a single JSON file holding the ordered merge rules.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedMerge, SerializedTokenizer, TOKENIZER_FILE};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
