//! Two-keyword disjunctive search over the master index.

pub mod engine;

pub use engine::SearchService;
