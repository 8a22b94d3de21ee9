// End-to-end indexing tests: corpus on disk -> master index

use crate::common::{assert_valid_stats, build_service, TestCorpus};
use tandem::core::indexer::IndexingPipeline;

#[test]
fn test_index_small_corpus() {
    let corpus = TestCorpus::small();
    let (service, stats) = build_service(&corpus);

    assert_eq!(stats.documents_indexed, 3);
    assert_valid_stats(&stats);

    // "rabbit" appears in alice.txt and garden.txt
    let occs = service.index().occurrences("rabbit").unwrap();
    assert_eq!(occs.len(), 2);
}

#[test]
fn test_index_excludes_noise_words() {
    let corpus = TestCorpus::small();
    let (service, _) = build_service(&corpus);

    assert!(service.index().occurrences("the").is_none());
    assert!(service.index().occurrences("a").is_none());
}

#[test]
fn test_index_normalizes_case_and_punctuation() {
    let corpus = TestCorpus::with_documents(
        &[("d1.txt", "Fall, fall. FALL! falling")],
        &["the"],
    );
    let (service, _) = build_service(&corpus);

    let occs = service.index().occurrences("fall").unwrap();
    assert_eq!(occs.len(), 1);
    assert_eq!(occs[0].frequency, 3);
    assert_eq!(service.index().occurrences("falling").unwrap()[0].frequency, 1);
}

#[test]
fn test_index_lists_stay_sorted() {
    let corpus = TestCorpus::with_documents(
        &[
            ("d1.txt", "echo"),
            ("d2.txt", "echo echo echo echo"),
            ("d3.txt", "echo echo"),
            ("d4.txt", "echo echo echo"),
        ],
        &[],
    );
    let (service, _) = build_service(&corpus);

    let occs = service.index().occurrences("echo").unwrap();
    let freqs: Vec<u32> = occs.iter().map(|o| o.frequency).collect();
    assert_eq!(freqs, vec![4, 3, 2, 1]);
}

#[test]
fn test_index_no_duplicate_documents() {
    let corpus = TestCorpus::small();
    let (service, _) = build_service(&corpus);

    for (_, occs) in service.index().iter() {
        let mut docs: Vec<&str> = occs.iter().map(|o| o.document.as_str()).collect();
        docs.sort_unstable();
        let before = docs.len();
        docs.dedup();
        assert_eq!(docs.len(), before);
    }
}

#[test]
fn test_missing_document_aborts_pass() {
    let corpus = TestCorpus::with_documents(&[("d1.txt", "hello")], &[]);
    std::fs::write(&corpus.docs_file, "d1.txt\nabsent.txt").unwrap();

    let pipeline = IndexingPipeline::new(None, 10).unwrap();
    let err = pipeline.index_collection(&corpus.docs_file).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_rejected_tokens_never_reach_the_index() {
    let corpus = TestCorpus::with_documents(
        &[("d1.txt", "ship 2nd can't x9 ...! SHIP")],
        &[],
    );
    let (service, stats) = build_service(&corpus);

    assert_eq!(stats.keywords, 1);
    assert_eq!(service.index().occurrences("ship").unwrap()[0].frequency, 2);
}
