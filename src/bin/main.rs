//! Builds `zipf.tsv` from the curated WordsWords word list.
//!
//! Run with no arguments to use the default asset paths:
//!   cargo run --bin lexicon_builder
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).
//! Stdout only carries the summary notice.

use anyhow::{Context, Result};
use clap::Parser;
use lexicon_core::config::{
    BuildConfig, DEFAULT_LANGUAGE, DEFAULT_OUTPUT_PATH, DEFAULT_TABLE_PATH, DEFAULT_WORDLIST_PATH,
};
use lexicon_core::{FloorOracle, FrequencyOracle, LexiconBuilder, ZipfTable};
use std::path::PathBuf;
use tracing::warn;

const NOTICE_TAG: &str = "[lexicon-builder]";

#[derive(Parser, Debug)]
#[command(name = "lexicon_builder", about = "Score a word list with Zipf frequencies")]
struct Args {
    /// Word list to read, one word per line
    #[arg(long, default_value = DEFAULT_WORDLIST_PATH)]
    input: PathBuf,

    /// Where to write the `word<TAB>score` table
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Precomputed `word<TAB>zipf` table used for scoring
    #[arg(long, default_value = DEFAULT_TABLE_PATH)]
    table: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = BuildConfig {
        input_path: args.input,
        output_path: args.output,
        table_path: Some(args.table),
        language: DEFAULT_LANGUAGE.to_string(),
    };

    let oracle = load_oracle(&config)?;
    let summary = LexiconBuilder::new(config, &*oracle)
        .build()
        .context("Lexicon build failed")?;

    let notice = serde_json::to_string(&summary).context("Failed to encode summary")?;
    println!("{} {}", NOTICE_TAG, notice);
    Ok(())
}

fn load_oracle(config: &BuildConfig) -> Result<Box<dyn FrequencyOracle>> {
    match &config.table_path {
        Some(path) if path.exists() => {
            let table = ZipfTable::load(path, &config.language)
                .with_context(|| format!("Failed to load frequency table {}", path.display()))?;
            Ok(Box::new(table))
        }
        Some(path) => {
            warn!(
                table = %path.display(),
                "Frequency table not found, every word gets the floor score"
            );
            Ok(Box::new(FloorOracle))
        }
        None => Ok(Box::new(FloorOracle)),
    }
}
