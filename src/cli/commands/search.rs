//! Search command - query a document collection

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::IndexingPipeline;
use crate::core::search::SearchService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// First search keyword
    pub first_term: String,

    /// Second search keyword
    pub second_term: String,

    /// File listing the document files to index
    #[arg(long, short = 'd')]
    pub docs: PathBuf,

    /// Noise-word list (falls back to the configured default)
    #[arg(long, short = 'n')]
    pub noise: Option<PathBuf>,

    /// Maximum number of results
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub first_term: String,
    pub second_term: String,
    pub documents_indexed: usize,
    pub total_results: usize,
    pub results: Vec<RankedDocument>,
    pub duration_ms: u64,
}

/// One ranked result
#[derive(Debug, Serialize)]
pub struct RankedDocument {
    pub rank: usize,
    pub document: String,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Noise flag falls back to the configured default list
    let noise = args
        .noise
        .as_deref()
        .or(config.indexing.noise_words.as_deref());

    let pipeline = IndexingPipeline::new(noise, config.indexing.max_document_size_mb)?;
    let normalizer = pipeline.normalizer().clone();
    let (index, stats) = pipeline.index_collection(&args.docs)?;

    let service = SearchService::new(
        index,
        normalizer,
        config.search.default_k,
        config.search.max_k,
        config.search.max_query_length,
    );

    let response = service.search(&args.first_term, &args.second_term, args.limit)?;

    let output = SearchOutput {
        first_term: response.first_term,
        second_term: response.second_term,
        documents_indexed: stats.documents_indexed,
        total_results: response.count,
        results: response
            .results
            .into_iter()
            .enumerate()
            .map(|(i, document)| RankedDocument {
                rank: i + 1,
                document,
            })
            .collect(),
        duration_ms: stats.duration_ms + response.duration_ms,
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!(
                    "No documents match '{}' or '{}'",
                    colors::term(&output.first_term),
                    colors::term(&output.second_term)
                );
            } else {
                println!(
                    "Found {} document(s) for '{}' or '{}':\n",
                    colors::number(&output.total_results.to_string()),
                    colors::term(&output.first_term),
                    colors::term(&output.second_term)
                );

                for result in &output.results {
                    println!(
                        "[{}] {}",
                        colors::rank(&result.rank.to_string()),
                        colors::document(&result.document)
                    );
                }

                println!(
                    "\n{}",
                    colors::dim(&format!(
                        "{} documents indexed and searched in {}",
                        output.documents_indexed,
                        format_duration(output.duration_ms as f64 / 1000.0)
                    ))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
