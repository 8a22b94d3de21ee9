//! The master keyword index.
//!
//! Maps every keyword to the list of documents containing it,
//! each with its occurrence frequency. Lists are maintained in
//! descending frequency order: merging a document appends its
//! occurrence and relocates it with a single binary-search
//! insertion step. The index is mutated only during the indexing
//! pass and is read-only once searching begins.

use std::collections::HashMap;

use crate::core::types::Occurrence;

/// Inverted index from keyword to ranked occurrence list.
///
/// Invariants, re-established after every merge:
/// - each keyword's list is non-increasing in frequency,
/// - a document appears at most once per keyword.
#[derive(Debug, Default)]
pub struct MasterIndex {
    entries: HashMap<String, Vec<Occurrence>>,
}

impl MasterIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one document's keyword counts into the index.
    ///
    /// For each keyword the occurrence is appended to the
    /// keyword's list (created if absent) and relocated to its
    /// rank. Must be called once per document, right after that
    /// document's scan; calling it twice for the same document
    /// would duplicate its postings.
    pub fn merge_document(&mut self, counts: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in counts {
            let list = self.entries.entry(keyword).or_default();
            list.push(occurrence);
            Self::insert_last_occurrence(list);
        }
    }

    /// Relocate the freshly appended last occurrence to its rank.
    ///
    /// The first n-1 elements are already in non-increasing
    /// frequency order. The insertion slot is found by binary
    /// search over their frequencies (a descending domain): an
    /// exact frequency match stops at that index; otherwise the
    /// search converges on the first index whose frequency is
    /// lower than the target. The element moves only when its
    /// frequency ties or exceeds its immediate predecessor's;
    /// otherwise the tail is already the correct rank.
    ///
    /// Returns the sequence of every mid index the search
    /// examined, in order. The probe path is a diagnostic for
    /// verifying search behavior in tests; production callers
    /// ignore it. A one-element list needs no search and reports
    /// `[0]`.
    pub fn insert_last_occurrence(list: &mut Vec<Occurrence>) -> Vec<usize> {
        if list.is_empty() {
            return Vec::new();
        }
        if list.len() == 1 {
            return vec![0];
        }

        let target = list[list.len() - 1].frequency;
        let mut probes = Vec::new();

        let mut low: isize = 0;
        // Search only the already-sorted prefix.
        let mut high: isize = list.len() as isize - 2;
        let mut slot = None;

        while low <= high {
            let mid = ((low + high) / 2) as usize;
            probes.push(mid);

            let freq = list[mid].frequency;
            if freq == target {
                slot = Some(mid);
                break;
            } else if freq < target {
                high = mid as isize - 1;
            } else {
                low = mid as isize + 1;
            }
        }

        // The element outranks its predecessor only when it ties
        // or exceeds the second-to-last frequency; otherwise the
        // tail already satisfies the ordering.
        let second_last = list[list.len() - 2].frequency;
        if target >= second_last {
            let occurrence = list.remove(list.len() - 1);
            list.insert(slot.unwrap_or(low as usize), occurrence);
        }

        probes
    }

    /// Ranked occurrence list for a keyword, best document first
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.entries.get(keyword).map(|list| list.as_slice())
    }

    /// Number of distinct keywords
    pub fn keyword_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of (keyword, document) postings
    pub fn posting_count(&self) -> usize {
        self.entries.values().map(|list| list.len()).sum()
    }

    /// True when nothing has been indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keywords and their ranked occurrence lists
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.entries
            .iter()
            .map(|(k, list)| (k.as_str(), list.as_slice()))
    }
}
