//! Per-document keyword counting.
//!
//! Scans one document's whitespace-delimited tokens and builds a
//! transient mapping from keyword to its occurrence count in that
//! document. The mapping is merged into the master index right
//! after the scan and then discarded.

use std::collections::HashMap;

use crate::core::indexer::KeywordNormalizer;
use crate::core::types::Occurrence;

/// Scans document text into per-document keyword counts
#[derive(Debug)]
pub struct DocumentScanner<'a> {
    normalizer: &'a KeywordNormalizer,
}

impl<'a> DocumentScanner<'a> {
    /// Create a scanner using the given normalizer
    pub fn new(normalizer: &'a KeywordNormalizer) -> Self {
        Self { normalizer }
    }

    /// Count keyword occurrences in one document.
    ///
    /// Every token is run through the normalizer; tokens that are
    /// not keywords are skipped. Each resulting occurrence carries
    /// `document_id` and a frequency of at least 1.
    pub fn scan(&self, document_id: &str, text: &str) -> HashMap<String, Occurrence> {
        let mut counts: HashMap<String, Occurrence> = HashMap::new();

        for token in text.split_whitespace() {
            let Some(keyword) = self.normalizer.normalize(token) else {
                continue;
            };

            counts
                .entry(keyword)
                .and_modify(|occ| occ.frequency += 1)
                .or_insert_with(|| Occurrence::new(document_id, 1));
        }

        counts
    }
}
