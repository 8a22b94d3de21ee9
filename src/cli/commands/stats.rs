//! Stats command - index a collection and report statistics

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::IndexingPipeline;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File listing the document files to index
    #[arg(long, short = 'd')]
    pub docs: PathBuf,

    /// Noise-word list (falls back to the configured default)
    #[arg(long, short = 'n')]
    pub noise: Option<PathBuf>,
}

/// Index statistics response
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    pub documents_indexed: usize,
    pub keywords: usize,
    pub postings: usize,
    pub noise_words: usize,
    pub duration_ms: u64,
}

/// Execute the stats command
pub fn execute(
    args: StatsArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let noise = args
        .noise
        .as_deref()
        .or(config.indexing.noise_words.as_deref());

    let pipeline = IndexingPipeline::new(noise, config.indexing.max_document_size_mb)?;
    let noise_words = pipeline.normalizer().noise_word_count();
    let (_index, stats) = pipeline.index_collection(&args.docs)?;

    let output = StatsOutput {
        documents_indexed: stats.documents_indexed,
        keywords: stats.keywords,
        postings: stats.postings,
        noise_words,
        duration_ms: stats.duration_ms,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Index statistics:"));
            println!(
                "  Documents: {}",
                colors::number(&output.documents_indexed.to_string())
            );
            println!(
                "  Keywords: {}",
                colors::number(&output.keywords.to_string())
            );
            println!(
                "  Postings: {}",
                colors::number(&output.postings.to_string())
            );
            println!(
                "  Noise words: {}",
                colors::number(&output.noise_words.to_string())
            );
            println!(
                "  Duration: {}",
                colors::number(&format_duration(output.duration_ms as f64 / 1000.0))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
