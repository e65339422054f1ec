//! Sink error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The destination rejected the batch.
    #[error("batch rejected by {table} ({status}): {message}")]
    Rejected {
        table: String,
        status: u16,
        message: String,
    },

    /// The sink is missing connection settings.
    #[error("sink is not configured: missing {0}")]
    NotConfigured(&'static str),
}
