//! Core data types for tandem.
//!
//! This module defines the data structures shared across the
//! indexing and search halves of the crate: occurrences, index
//! statistics and search responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single occurrence of a keyword in a document.
///
/// Stores the document name and the number of times the keyword
/// appears in that document. Occurrence lists in the master index
/// are kept in descending order of frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Document in which the keyword occurs
    pub document: String,

    /// Number of times the keyword occurs in that document
    pub frequency: u32,
}

impl Occurrence {
    /// Create an occurrence with the given document,frequency pair
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self {
            document: document.into(),
            frequency,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

/// Statistics from an indexing pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents indexed
    pub documents_indexed: usize,

    /// Number of distinct keywords in the index
    pub keywords: usize,

    /// Total number of (keyword, document) postings
    pub postings: usize,

    /// Indexing duration in milliseconds
    pub duration_ms: u64,
}

/// Response from a two-keyword search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// First query term, as entered
    pub first_term: String,

    /// Second query term, as entered
    pub second_term: String,

    /// Matching document names, best match first
    pub results: Vec<String>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}
