//! CLI adapter for tandem
//!
//! Provides the command-line interface over the core engine. The
//! index lives only for the duration of one invocation: each
//! command that needs it builds it from the document list, uses
//! it, and lets it go.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// tandem - Two-Keyword Document Search
///
/// A tiny in-memory search engine. Index a document collection and ask
/// which documents mention either of two keywords, ranked by how often.
#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(version)]
#[command(about = "Two-keyword document search engine", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a document collection for two keywords
    Search(commands::SearchArgs),

    /// Index a document collection and report statistics
    Stats(commands::StatsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  tandem completions bash > ~/.local/share/bash-completion/completions/tandem
    ///   zsh:   tandem completions zsh > ~/.zfunc/_tandem
    ///   fish:  tandem completions fish > ~/.config/fish/completions/tandem.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::xdg::XdgDirs;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load()?;

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &config, cli.format),
        Commands::Stats(args) => commands::stats::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
