// Test fixtures for integration testing

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Document collection fixture written to a temporary directory.
///
/// Produces the two flat inputs the engine consumes: a document
/// list file naming one document per line, and a noise-word list.
#[allow(dead_code)] // Used in integration tests
pub struct TestCorpus {
    pub dir: TempDir,
    pub docs_file: PathBuf,
    pub noise_file: PathBuf,
}

impl TestCorpus {
    /// Create a corpus from (name, contents) pairs and noise words
    #[allow(dead_code)] // Used in integration tests
    pub fn with_documents(documents: &[(&str, &str)], noise_words: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let mut names = Vec::new();
        for (name, contents) in documents {
            fs::write(dir.path().join(name), contents).expect("Failed to write document");
            names.push(*name);
        }

        let docs_file = dir.path().join("docs.txt");
        fs::write(&docs_file, names.join("\n")).expect("Failed to write document list");

        let noise_file = dir.path().join("noise.txt");
        fs::write(&noise_file, noise_words.join("\n")).expect("Failed to write noise list");

        Self {
            dir,
            docs_file,
            noise_file,
        }
    }

    /// A small prose corpus with predictable keyword frequencies
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_documents(
            &[
                (
                    "alice.txt",
                    "Alice went down the rabbit hole. Down, down, down: \
                     the fall seemed endless.",
                ),
                (
                    "rocket.txt",
                    "The rocket fell back to the pad. Engineers blamed \
                     the fall on a frozen valve.",
                ),
                (
                    "garden.txt",
                    "A quiet garden, rows of carrots and one bold rabbit \
                     eating the carrots.",
                ),
            ],
            &["the", "a", "of", "and", "on", "to", "one"],
        )
    }
}
