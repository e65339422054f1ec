//! # alkitab-core
//!
//! Core types for alkitab-seed: the canonical book catalog, book-name
//! normalization, shape-tolerant JSON traversal, and the flat verse record
//! written to the destination table.
//!
//! Nothing in this crate performs I/O. The fetch, sink, and ingest crates
//! build on these pieces.

pub mod catalog;
pub mod errors;
pub mod mode;
pub mod normalize;
pub mod record;
pub mod traverse;

pub use catalog::{CanonicalBook, Catalog};
pub use errors::CoreError;
pub use mode::{DEFAULT_BULK_URL, DEFAULT_GRAPHQL_URL, DEFAULT_GRAPHQL_VERSION, SourceMode};
pub use normalize::{NormalizedName, Normalizer};
pub use record::VerseRecord;
