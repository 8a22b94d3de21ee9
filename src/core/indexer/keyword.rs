//! Keyword normalization.
//!
//! Converts raw whitespace-delimited tokens into canonical
//! keywords: lower-cased, stripped of trailing punctuation,
//! strictly alphabetic and not in the noise-word set. Tokens that
//! fail any of these rules are not keywords and are skipped by
//! both indexing and search.

use std::collections::HashSet;

/// Punctuation stripped from the end of a token, one character at
/// a time.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Normalizes raw tokens into keywords against a fixed noise-word
/// set.
///
/// The noise set is built once before indexing starts and is
/// read-only for the normalizer's lifetime.
#[derive(Debug, Clone)]
pub struct KeywordNormalizer {
    noise_words: HashSet<String>,
}

impl KeywordNormalizer {
    /// Create a normalizer over the given noise-word set
    pub fn new(noise_words: HashSet<String>) -> Self {
        Self { noise_words }
    }

    /// Number of noise words in the set
    pub fn noise_word_count(&self) -> usize {
        self.noise_words.len()
    }

    /// Normalize a raw token into a keyword.
    ///
    /// Returns `None` when the token is not a keyword:
    /// - stripping trailing punctuation leaves nothing,
    /// - the stripped token is a noise word,
    /// - any remaining character is outside `a`-`z` (embedded
    ///   digits, apostrophes and hyphens all disqualify the
    ///   token, so "can't" and "set-up" are rejected whole).
    ///
    /// Normalization is idempotent: a returned keyword normalizes
    /// to itself.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let mut word = token.to_lowercase();

        // Strip trailing punctuation one character at a time
        while let Some(last) = word.chars().last() {
            if TRAILING_PUNCTUATION.contains(&last) {
                word.pop();
            } else {
                break;
            }
        }
        if word.is_empty() {
            return None;
        }

        if self.noise_words.contains(&word) {
            return None;
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }

        Some(word)
    }
}
