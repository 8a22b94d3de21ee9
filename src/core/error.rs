//! Error types and error handling for tandem.
//!
//! This module defines the error types used throughout the
//! application. Query terms that simply don't match anything are
//! not errors; they surface as empty search results.

use thiserror::Error;

/// Result type alias for tandem operations
pub type Result<T> = std::result::Result<T, TandemError>;

/// Main error type for tandem
#[derive(Error, Debug)]
pub enum TandemError {
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Indexing failed: {0}")]
    IndexingFailed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TandemError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, TandemError::SourceUnavailable(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            TandemError::InvalidQuery(_) | TandemError::ConfigError(_)
        )
    }
}
