//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub indexing: IndexingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Serialize)]
pub struct IndexingConfig {
    pub noise_words: Option<String>,
    pub max_document_size_mb: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchConfig {
    pub default_k: usize,
    pub max_k: usize,
    pub max_query_length: usize,
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = crate::core::xdg::XdgDirs::new();
    let config_file = xdg.config_file().to_string_lossy().into_owned();

    let response = ConfigResponse {
        config_file,
        indexing: IndexingConfig {
            noise_words: config
                .indexing
                .noise_words
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            max_document_size_mb: config.indexing.max_document_size_mb,
        },
        search: SearchConfig {
            default_k: config.search.default_k,
            max_k: config.search.max_k,
            max_query_length: config.search.max_query_length,
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  indexing:");
            println!("    noise_words: {:?}", response.indexing.noise_words);
            println!(
                "    max_document_size_mb: {}",
                response.indexing.max_document_size_mb
            );
            println!("  search:");
            println!("    default_k: {}", response.search.default_k);
            println!("    max_k: {}", response.search.max_k);
            println!(
                "    max_query_length: {}",
                response.search.max_query_length
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
