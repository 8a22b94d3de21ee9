//! Core domain logic (interface-agnostic)
//!
//! This module contains all engine logic that is independent of
//! the command-line interface.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG config directory handling
//! - **indexer**: Normalization, document scanning, pipeline
//! - **index**: The master keyword index and ranked insertion
//! - **search**: Two-keyword disjunctive queries

pub mod config;
pub mod error;
pub mod index;
pub mod indexer;
pub mod search;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, TandemError};
pub use index::MasterIndex;
