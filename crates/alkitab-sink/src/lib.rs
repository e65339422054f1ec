//! # alkitab-sink
//!
//! Destination for verse records. The ingest driver only sees the
//! [`VerseSink`] trait; [`PostgrestSink`] is the production implementation
//! writing to a Supabase table over its REST interface. [`DiscardSink`]
//! stands in for dry runs without credentials.
//!
//! The sink performs no deduplication. Running an ingestion twice inserts
//! every row twice unless the table enforces uniqueness.

mod error;
mod postgrest;

pub use error::SinkError;
pub use postgrest::PostgrestSink;

use alkitab_core::VerseRecord;
use async_trait::async_trait;

/// Batch-insert destination.
#[async_trait]
pub trait VerseSink: Send {
    /// Insert `rows` into `table`, returning the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the batch could not be sent or was rejected.
    async fn insert_batch(&mut self, table: &str, rows: &[VerseRecord]) -> Result<usize, SinkError>;
}

/// Sink that accepts every batch and writes nothing. Used for dry runs when
/// no destination is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

#[async_trait]
impl VerseSink for DiscardSink {
    async fn insert_batch(&mut self, table: &str, rows: &[VerseRecord]) -> Result<usize, SinkError> {
        tracing::debug!(table, rows = rows.len(), "discarding batch");
        Ok(rows.len())
    }
}
