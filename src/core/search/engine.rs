//! Two-keyword disjunctive search.
//!
//! Answers "term1 or term2" queries against the master index by
//! merging the two keywords' ranked occurrence lists into a
//! single deduplicated top-k document ranking. Ties in frequency
//! are broken in favor of the first term; this asymmetry is a
//! documented contract, not an accident.

use std::collections::HashSet;
use std::time::Instant;

use crate::core::error::{Result, TandemError};
use crate::core::index::MasterIndex;
use crate::core::indexer::KeywordNormalizer;
use crate::core::types::{Occurrence, SearchResponse};

/// Search service over a fully built master index.
///
/// Takes the index by value: once searching starts the index is
/// read-only, so indexing and querying can never overlap.
pub struct SearchService {
    index: MasterIndex,
    normalizer: KeywordNormalizer,
    default_k: usize,
    max_k: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a search service.
    ///
    /// The normalizer must be the one the index was built with so
    /// query terms see the same noise-word set.
    pub fn new(
        index: MasterIndex,
        normalizer: KeywordNormalizer,
        default_k: usize,
        max_k: usize,
        max_query_length: usize,
    ) -> Self {
        Self {
            index,
            normalizer,
            default_k,
            max_k,
            max_query_length,
        }
    }

    /// The underlying index
    pub fn index(&self) -> &MasterIndex {
        &self.index
    }

    /// Execute a two-term query.
    ///
    /// Wraps [`top_k`](Self::top_k) with the query-length guard,
    /// the k clamp and duration tracking. Terms that normalize to
    /// nothing or miss the index are not errors; they contribute
    /// an empty list and may yield an empty result.
    pub fn search(&self, term1: &str, term2: &str, k: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();

        if term1.len() > self.max_query_length || term2.len() > self.max_query_length {
            return Err(TandemError::InvalidQuery(format!(
                "query term exceeds {} characters",
                self.max_query_length
            )));
        }

        let k_limit = k.unwrap_or(self.default_k).min(self.max_k);
        let results = self.top_k(term1, term2, k_limit);

        tracing::debug!(
            "Query ({term1}, {term2}) matched {} documents",
            results.len()
        );

        let count = results.len();
        Ok(SearchResponse {
            first_term: term1.to_string(),
            second_term: term2.to_string(),
            results,
            count,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Documents matching either term, best match first.
    ///
    /// Both terms are normalized; a term that is not a keyword or
    /// has no index entry contributes an empty list. With one
    /// non-empty list the result is its first `k` documents in
    /// rank order. With two, the lists are merged head-to-head by
    /// frequency: the strictly greater head is emitted and that
    /// document is purged from both lists; equal heads naming
    /// different documents emit the first term's document before
    /// the second's. Never returns more than `k` documents, and
    /// never mutates the index.
    pub fn top_k(&self, term1: &str, term2: &str, k: usize) -> Vec<String> {
        let list1 = self.lookup(term1);
        let list2 = self.lookup(term2);

        match (list1.is_empty(), list2.is_empty()) {
            (true, true) => Vec::new(),
            (false, true) => Self::take_ranked(list1, k),
            (true, false) => Self::take_ranked(list2, k),
            (false, false) => Self::merge_ranked(list1, list2, k),
        }
    }

    /// Occurrence list for a raw query term, empty when the term
    /// is not a keyword or is not indexed.
    fn lookup(&self, term: &str) -> &[Occurrence] {
        self.normalizer
            .normalize(term)
            .and_then(|keyword| self.index.occurrences(&keyword))
            .unwrap_or(&[])
    }

    /// First `k` document names of a single ranked list
    fn take_ranked(list: &[Occurrence], k: usize) -> Vec<String> {
        list.iter().take(k).map(|o| o.document.clone()).collect()
    }

    /// Merge two ranked lists into a deduplicated top-k.
    ///
    /// Two cursors walk the read-only slices; a purge set stands
    /// in for the removals a destructive merge would do, so an
    /// already-emitted document is skipped in both lists.
    fn merge_ranked(list1: &[Occurrence], list2: &[Occurrence], k: usize) -> Vec<String> {
        let mut results: Vec<String> = Vec::new();
        let mut purged: HashSet<&str> = HashSet::new();
        let mut i = 0;
        let mut j = 0;

        while results.len() < k {
            while i < list1.len() && purged.contains(list1[i].document.as_str()) {
                i += 1;
            }
            while j < list2.len() && purged.contains(list2[j].document.as_str()) {
                j += 1;
            }
            if i >= list1.len() && j >= list2.len() {
                break;
            }

            // An exhausted list counts as frequency 0, which a
            // live head always beats.
            let freq1 = list1.get(i).map_or(0, |o| o.frequency);
            let freq2 = list2.get(j).map_or(0, |o| o.frequency);

            if freq2 > freq1 {
                let doc = &list2[j].document;
                purged.insert(doc);
                results.push(doc.clone());
            } else if freq1 > freq2 {
                let doc = &list1[i].document;
                purged.insert(doc);
                results.push(doc.clone());
            } else {
                // Equal, and both heads are live since frequencies
                // are strictly positive. First term wins the tie.
                let doc1 = &list1[i].document;
                let doc2 = &list2[j].document;
                purged.insert(doc1);
                results.push(doc1.clone());
                if doc2 != doc1 && results.len() < k {
                    purged.insert(doc2);
                    results.push(doc2.clone());
                }
            }
        }

        results
    }
}
