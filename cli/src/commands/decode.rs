//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: PathBuf,

    /// Token IDs to decode (comma or whitespace separated)
    #[arg(short = 'i', long)]
    pub tokens: String,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::Tokenizer;
use std::path::PathBuf;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer = Tokenizer::load(&cmd.tokenizer)
        .with_context(|| format!("failed to load tokenizer from {}", cmd.tokenizer.display()))?;

    let ids = parse_ids(&cmd.tokens)?;

    // Decode
    let text = tokenizer.decode(&ids)?;

    println!("{}", text);

    Ok(())
}

/// Parse token IDs separated by commas and/or whitespace.
fn parse_ids(tokens: &str) -> AnyhowResult<Vec<u32>> {
    tokens
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid token id {:?}", s))
        })
        .collect()
}
