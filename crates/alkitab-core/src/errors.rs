//! Core error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A source mode string did not match any known mode or alias.
    #[error("unknown source mode '{0}' (expected auto, bulk, or paginated)")]
    UnknownSourceMode(String),
}
