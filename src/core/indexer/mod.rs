//! Document indexing: normalization, scanning and the pipeline.
//!
//! - **keyword**: token normalization against the noise-word set
//! - **document**: per-document keyword counting
//! - **source**: document-list, noise-list and document reading
//! - **pipeline**: the sequential indexing pass

pub mod document;
pub mod keyword;
pub mod pipeline;
pub mod source;

pub use document::DocumentScanner;
pub use keyword::KeywordNormalizer;
pub use pipeline::IndexingPipeline;
pub use source::DocumentEntry;
