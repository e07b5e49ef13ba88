//! Inspect command implementation.

use clap::Parser;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Show at most this many learned tokens
    #[arg(short, long)]
    pub limit: Option<usize>,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::Tokenizer;
use std::path::PathBuf;

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(&cmd.tokenizer)
        .with_context(|| format!("failed to load tokenizer from {}", cmd.tokenizer.display()))?;

    println!("Vocab size: {}", tokenizer.vocab_size());
    println!("Merges: {}", tokenizer.merges().len());

    let limit = cmd.limit.unwrap_or(usize::MAX);
    for (pair, id) in tokenizer.merges().iter().take(limit) {
        let bytes = tokenizer.token_bytes(id).unwrap_or_default();
        println!(
            "{:>6}  ({:>5}, {:>5})  {:?}",
            id,
            pair.0,
            pair.1,
            String::from_utf8_lossy(bytes)
        );
    }

    Ok(())
}
