//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training data file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target vocabulary size, including the 256 byte tokens
    #[arg(short = 'n', long, default_value_t = 276)]
    pub vocab_size: usize,

    /// Count pairs in parallel on large inputs
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::Tokenizer;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    log::info!(
        "training on {} (vocab size {}, parallel {})",
        cmd.input.display(),
        cmd.vocab_size,
        cmd.parallel
    );

    // Read training data
    let start = Instant::now();
    let data = fs::read_to_string(&cmd.input)
        .with_context(|| format!("failed to read {}", cmd.input.display()))?;
    log::info!("read {} bytes in {:.2?}", data.len(), start.elapsed());

    // Train
    let start = Instant::now();
    let tokenizer = Tokenizer::builder()
        .vocab_size(cmd.vocab_size)
        .parallel(cmd.parallel)
        .train(&data)
        .context("training failed")?;
    let elapsed = start.elapsed();

    // Save model
    tokenizer
        .save(&cmd.output)
        .with_context(|| format!("failed to save model to {}", cmd.output.display()))?;

    println!("Training completed in {:.2?}", elapsed);
    println!("Final vocab size: {}", tokenizer.vocab_size());
    if let Some(report) = tokenizer.report() {
        println!("Merges learned: {}", report.steps.len());
        if report.exhausted {
            println!("Stopped early: no pairs left to merge");
        }
        println!("Old token count: {}", report.initial_len);
        println!("New token count: {}", report.final_len);
        println!("Compression ratio: {:.3}", report.compression_ratio());
    }
    println!("Model saved to {}", cmd.output.display());

    Ok(())
}
