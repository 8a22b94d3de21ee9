//! tandem - Two-Keyword Document Search
//!
//! A tiny in-memory search engine over a small document
//! collection. Documents are scanned into an inverted index
//! mapping each keyword to the documents containing it, ranked by
//! occurrence frequency; queries ask for the documents matching
//! either of two keywords and get back at most five names.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Engine logic (interface-agnostic)
//!   - config, error, types, xdg
//!   - indexer (normalization, scanning, sources, pipeline)
//!   - index (the master keyword index, ranked insertion)
//!   - search (two-keyword disjunctive queries)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - search, stats, show-config, completions
//!
//! # Key Properties
//!
//! - Occurrence lists stay sorted by descending frequency after
//!   every merge
//! - A document appears at most once per keyword, and at most
//!   once per result set
//! - Frequency ties are broken in favor of the first query term
//! - Indexing is a strict sequential pass; the index is read-only
//!   once searching begins

// Core engine logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, TandemError};
pub use core::index::MasterIndex;
pub use core::indexer::{IndexingPipeline, KeywordNormalizer};
pub use core::search::SearchService;
pub use core::types::*;
