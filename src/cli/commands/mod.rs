//! CLI command implementations

pub mod completions;
pub mod config;
pub mod search;
pub mod stats;

pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use search::SearchArgs;
pub use stats::StatsArgs;
