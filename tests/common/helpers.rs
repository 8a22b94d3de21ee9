// Test helper functions

use tandem::core::config::Config;
use tandem::core::indexer::IndexingPipeline;
use tandem::core::search::SearchService;
use tandem::core::types::IndexStats;

use super::fixtures::TestCorpus;

/// Index a corpus and return a ready search service plus stats
#[allow(dead_code)] // Used in integration tests
pub fn build_service(corpus: &TestCorpus) -> (SearchService, IndexStats) {
    let config = Config::default();

    let pipeline = IndexingPipeline::new(
        Some(corpus.noise_file.as_path()),
        config.indexing.max_document_size_mb,
    )
    .expect("Failed to load noise words");

    let normalizer = pipeline.normalizer().clone();
    let (index, stats) = pipeline
        .index_collection(&corpus.docs_file)
        .expect("Indexing should succeed");

    let service = SearchService::new(
        index,
        normalizer,
        config.search.default_k,
        config.search.max_k,
        config.search.max_query_length,
    );

    (service, stats)
}

/// Assert that index stats are valid
#[allow(dead_code)] // Used in integration tests
pub fn assert_valid_stats(stats: &IndexStats) {
    assert!(
        stats.documents_indexed > 0,
        "Expected documents_indexed > 0, got {}",
        stats.documents_indexed
    );
    assert!(
        stats.keywords > 0,
        "Expected keywords > 0, got {}",
        stats.keywords
    );
    assert!(
        stats.postings >= stats.keywords,
        "Expected postings ({}) >= keywords ({})",
        stats.postings,
        stats.keywords
    );
}
