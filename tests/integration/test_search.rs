// End-to-end search tests: corpus on disk -> ranked results

use crate::common::{build_service, TestCorpus};

#[test]
fn test_search_single_keyword() {
    let corpus = TestCorpus::small();
    let (service, _) = build_service(&corpus);

    // "rocket" only appears in rocket.txt
    let results = service.top_k("rocket", "zzz", 5);
    assert_eq!(results, vec!["rocket.txt"]);
}

#[test]
fn test_search_merges_both_keywords() {
    let corpus = TestCorpus::with_documents(
        &[
            ("d1.txt", "bug bug code"),
            ("d2.txt", "code code code"),
        ],
        &["the", "a"],
    );
    let (service, _) = build_service(&corpus);

    assert_eq!(service.top_k("bug", "code", 5), vec!["d2.txt", "d1.txt"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let corpus = TestCorpus::small();
    let (service, _) = build_service(&corpus);

    let lower = service.top_k("rabbit", "rocket", 5);
    let shouty = service.top_k("Rabbit.", "ROCKET", 5);
    assert_eq!(lower, shouty);
}

#[test]
fn test_search_noise_word_contributes_nothing() {
    let corpus = TestCorpus::small();
    let (service, _) = build_service(&corpus);

    // "the" is noise; only "rabbit" matches
    let results = service.top_k("the", "rabbit", 5);
    assert_eq!(results, service.top_k("zzz", "rabbit", 5));
}

#[test]
fn test_search_nothing_matches() {
    let corpus = TestCorpus::small();
    let (service, _) = build_service(&corpus);

    assert!(service.top_k("zzz", "qqq", 5).is_empty());
}

#[test]
fn test_search_deduplicates_documents() {
    // alice.txt matches both terms; it must appear once.
    let corpus = TestCorpus::small();
    let (service, _) = build_service(&corpus);

    let results = service.top_k("down", "fall", 5);
    let alice_count = results.iter().filter(|d| d.as_str() == "alice.txt").count();
    assert_eq!(alice_count, 1);
}

#[test]
fn test_search_tie_favors_first_term() {
    let corpus = TestCorpus::with_documents(
        &[("d1.txt", "deep deep"), ("d2.txt", "world world")],
        &[],
    );
    let (service, _) = build_service(&corpus);

    assert_eq!(service.top_k("deep", "world", 5), vec!["d1.txt", "d2.txt"]);
    assert_eq!(service.top_k("world", "deep", 5), vec!["d2.txt", "d1.txt"]);
}

#[test]
fn test_search_caps_results_at_five() {
    let documents: Vec<(String, String)> = (0..7)
        .map(|i| (format!("d{i}.txt"), "word ".repeat(7 - i)))
        .collect();
    let doc_refs: Vec<(&str, &str)> = documents
        .iter()
        .map(|(n, t)| (n.as_str(), t.as_str()))
        .collect();
    let corpus = TestCorpus::with_documents(&doc_refs, &[]);
    let (service, _) = build_service(&corpus);

    let response = service.search("word", "zzz", None).unwrap();
    assert_eq!(response.count, 5);
    assert_eq!(response.results[0], "d0.txt");
}

#[test]
fn test_search_ranks_by_frequency_across_terms() {
    let corpus = TestCorpus::small();
    let (service, _) = build_service(&corpus);

    // alice.txt has "down" 4 times; garden.txt has "carrots"
    // twice; rocket.txt matches "fall" once.
    let results = service.top_k("down", "carrots", 5);
    assert_eq!(results, vec!["alice.txt", "garden.txt"]);
}
