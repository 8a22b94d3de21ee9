//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end indexing pass:
//! 1. Load the noise-word list
//! 2. Read the document list
//! 3. Scan each document into per-document keyword counts
//! 4. Merge each document into the master index
//!
//! The pass is strictly sequential: noise words are fully loaded
//! before any document is read, and each document is merged
//! immediately after its scan. Any source failure aborts the
//! whole pass; there is no partial-index recovery.

use std::path::Path;
use std::time::Instant;

use crate::core::error::Result;
use crate::core::index::MasterIndex;
use crate::core::indexer::{source, DocumentScanner, KeywordNormalizer};
use crate::core::types::IndexStats;

/// Orchestrates the indexing pass
#[derive(Debug)]
pub struct IndexingPipeline {
    normalizer: KeywordNormalizer,
    max_document_bytes: u64,
}

impl IndexingPipeline {
    /// Create a pipeline from a noise-word list file.
    ///
    /// # Arguments
    ///
    /// * `noise_words` - Path to the noise-word list, or `None`
    ///   for an empty noise set
    /// * `max_document_size_mb` - Maximum document size in
    ///   megabytes
    pub fn new(noise_words: Option<&Path>, max_document_size_mb: usize) -> Result<Self> {
        let noise = match noise_words {
            Some(path) => source::load_noise_words(path)?,
            None => Default::default(),
        };

        Ok(Self {
            normalizer: KeywordNormalizer::new(noise),
            max_document_bytes: (max_document_size_mb as u64) * 1024 * 1024,
        })
    }

    /// The normalizer built from the noise-word list.
    ///
    /// Search reuses it so query terms are normalized against the
    /// same noise set the index was built with.
    pub fn normalizer(&self) -> &KeywordNormalizer {
        &self.normalizer
    }

    /// Index every document named in the list file.
    ///
    /// Returns the populated master index and pass statistics.
    /// The first unreadable source aborts the pass.
    pub fn index_collection(&self, docs_file: &Path) -> Result<(MasterIndex, IndexStats)> {
        let start = Instant::now();

        tracing::info!("Reading document list from {:?}", docs_file);
        let entries = source::read_document_list(docs_file)?;
        tracing::info!(
            "Indexing {} documents ({} noise words)",
            entries.len(),
            self.normalizer.noise_word_count()
        );

        let scanner = DocumentScanner::new(&self.normalizer);
        let mut index = MasterIndex::new();

        for entry in &entries {
            let text = source::read_document(entry, self.max_document_bytes)?;
            let counts = scanner.scan(&entry.name, &text);

            tracing::debug!("Indexed {} ({} keywords)", entry.name, counts.len());
            index.merge_document(counts);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Indexing complete: {} documents, {} keywords, \
             {} postings in {}ms",
            entries.len(),
            index.keyword_count(),
            index.posting_count(),
            duration_ms
        );

        let stats = IndexStats {
            documents_indexed: entries.len(),
            keywords: index.keyword_count(),
            postings: index.posting_count(),
            duration_ms,
        };

        Ok((index, stats))
    }
}
