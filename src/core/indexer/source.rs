//! Document and noise-word sources.
//!
//! The index is built from two flat inputs: a document list file
//! naming one document file per entry, and a noise-word list.
//! Entries are whitespace-separated. Relative document names are
//! resolved against the list file's parent directory so a corpus
//! directory is self-contained; the occurrence's document
//! identifier stays the name as written in the list.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, TandemError};

/// An entry from the document list: the name used as the document
/// identifier, and the resolved path it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Load the noise-word list from a file.
///
/// Words are whitespace-separated; the set is built once before
/// indexing begins.
pub fn load_noise_words(path: &Path) -> Result<HashSet<String>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        TandemError::SourceUnavailable(format!(
            "noise-word list {}: {e}",
            path.display()
        ))
    })?;

    Ok(contents
        .split_whitespace()
        .map(|w| w.to_string())
        .collect())
}

/// Read the document list file into document entries.
///
/// Names are whitespace-separated; relative names resolve against
/// the list file's parent directory.
pub fn read_document_list(path: &Path) -> Result<Vec<DocumentEntry>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        TandemError::SourceUnavailable(format!(
            "document list {}: {e}",
            path.display()
        ))
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));

    Ok(contents
        .split_whitespace()
        .map(|name| {
            let candidate = PathBuf::from(name);
            let path = if candidate.is_absolute() {
                candidate
            } else {
                base.join(&candidate)
            };
            DocumentEntry {
                name: name.to_string(),
                path,
            }
        })
        .collect())
}

/// Read one document's contents.
///
/// A missing document is a `SourceUnavailable` error; a document
/// over the size limit or not valid UTF-8 is `IndexingFailed`.
pub fn read_document(entry: &DocumentEntry, max_bytes: u64) -> Result<String> {
    let metadata = fs::metadata(&entry.path).map_err(|e| {
        TandemError::SourceUnavailable(format!("document {}: {e}", entry.name))
    })?;

    if metadata.len() > max_bytes {
        return Err(TandemError::IndexingFailed(format!(
            "document {} is {} bytes, over the {} byte limit",
            entry.name,
            metadata.len(),
            max_bytes
        )));
    }

    fs::read_to_string(&entry.path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            TandemError::IndexingFailed(format!("document {} is not UTF-8", entry.name))
        } else {
            TandemError::SourceUnavailable(format!("document {}: {e}", entry.name))
        }
    })
}
