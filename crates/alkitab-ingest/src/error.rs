//! Ingestion error types.

use alkitab_fetch::FetchError;
use alkitab_sink::SinkError;
use thiserror::Error;

/// Fatal errors that abort an ingestion run (or, for the bulk path in
/// automatic mode, trigger the fallback to the paginated source).
#[derive(Debug, Error)]
pub enum IngestError {
    /// Fetching or parsing the bulk document failed.
    #[error("bulk source failed: {0}")]
    Bulk(#[source] FetchError),

    /// The bulk document's top level matches no known shape.
    #[error("bulk document has an unrecognized shape (top level is {0})")]
    UnrecognizedDocument(&'static str),

    /// A chapter fetch failed.
    #[error("paginated source failed at {book} chapter {chapter}: {source}")]
    Paginated {
        book: String,
        chapter: u32,
        #[source]
        source: FetchError,
    },

    /// The destination rejected a batch. Earlier batches stay committed.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

impl IngestError {
    /// Whether automatic mode may fall back to the paginated source.
    ///
    /// Only failures on the bulk path qualify. Sink errors never do.
    #[must_use]
    pub const fn allows_fallback(&self) -> bool {
        matches!(self, Self::Bulk(_) | Self::UnrecognizedDocument(_))
    }
}
