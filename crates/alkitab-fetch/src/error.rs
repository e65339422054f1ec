//! Transport error types.

use thiserror::Error;

/// Errors raised while fetching from either remote source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the remote.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The remote returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the remote asked us to wait.
        retry_after_secs: u64,
    },

    /// The response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The paginated endpoint reported an application-level error.
    #[error("remote error for {book} {chapter}: {message}")]
    Remote {
        book: String,
        chapter: u32,
        message: String,
    },
}

impl FetchError {
    /// Whether the remote itself rejected the request at the application
    /// level, as opposed to a transport or status failure.
    #[must_use]
    pub const fn is_remote_application(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}
