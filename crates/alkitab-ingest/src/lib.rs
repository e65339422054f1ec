//! # alkitab-ingest
//!
//! Loads the corpus from a bulk document or a paginated chapter endpoint
//! into a batch sink.
//!
//! - [`strategy`]: the bulk and paginated record producers
//! - [`IngestionBuffer`]: batching and dry-run accounting
//! - [`Ingestor`]: strategy selection, fallback, final flush, and the
//!   completeness audit

pub mod strategy;

mod buffer;
mod driver;
mod error;
mod report;

#[cfg(test)]
mod test_support;

pub use buffer::IngestionBuffer;
pub use driver::{IngestSettings, Ingestor};
pub use error::IngestError;
pub use report::{IngestReport, SourceKind};
