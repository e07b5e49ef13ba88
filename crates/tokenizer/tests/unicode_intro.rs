//! End-to-end training on a short mixed-script English text.

use bytepair_tokenizer::{Tokenizer, TokenizerError};
use std::path::PathBuf;

const TEXT: &str = include_str!("data/unicode_intro.txt");

fn tokenizer() -> Tokenizer {
    Tokenizer::train(TEXT, 276).unwrap()
}

#[test]
fn learns_twenty_merges() {
    let tokenizer = tokenizer();
    let report = tokenizer.report().unwrap();

    assert_eq!(TEXT.chars().count(), 533);
    assert_eq!(report.initial_len, 616);
    assert_eq!(report.final_len, 451);
    assert_eq!(tokenizer.merges().len(), 20);
    assert_eq!(tokenizer.vocab_size(), 276);
}

#[test]
fn vocabulary_entries() {
    let tokenizer = tokenizer();

    assert_eq!(tokenizer.token_bytes(256), Some(&b"e "[..]));
    assert_eq!(tokenizer.token_bytes(257), Some(&b"\xf0\x9f"[..]));
    assert_eq!(tokenizer.token_bytes(271), Some(&b"ing"[..]));
    assert_eq!(tokenizer.token_bytes(273), Some(&b" th"[..]));
    assert_eq!(tokenizer.token_bytes(276), None);
}

#[test]
fn encodes_unseen_text() {
    let tokenizer = tokenizer();

    assert_eq!(
        tokenizer.encode("how are you doing ;)"),
        vec![104, 111, 119, 32, 263, 256, 121, 111, 117, 32, 100, 111, 271, 32, 59, 41]
    );
    assert_eq!(tokenizer.encode("the thing"), vec![262, 256, 262, 271]);
    assert_eq!(tokenizer.decode(&tokenizer.encode("One Sample Text")).unwrap(), "One Sample Text");
}

#[test]
fn training_text_roundtrips() {
    let tokenizer = tokenizer();
    let ids = tokenizer.encode(TEXT);

    assert_eq!(ids.len(), 451);
    assert_eq!(tokenizer.decode(&ids).unwrap(), TEXT);
}

#[test]
fn partial_character_decodes_lossily() {
    let tokenizer = tokenizer();

    // 257 is the shared 2-byte prefix of many emoji
    assert_eq!(tokenizer.decode(&[257]).unwrap(), "\u{FFFD}");
    assert!(matches!(
        tokenizer.decode(&[257, 1000]),
        Err(TokenizerError::UnknownSymbol(1000))
    ));
}

#[test]
fn saved_model_encodes_identically() {
    let dir: PathBuf = std::env::temp_dir().join(format!(
        "bytepair_unicode_intro_{}",
        std::process::id()
    ));
    let tokenizer = tokenizer();

    tokenizer.save(&dir).unwrap();
    let loaded = Tokenizer::load(&dir).unwrap();

    assert_eq!(loaded.encode(TEXT), tokenizer.encode(TEXT));
    assert_eq!(loaded.vocab(), tokenizer.vocab());

    std::fs::remove_dir_all(dir).ok();
}
