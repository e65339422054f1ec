//! Source strategies.
//!
//! Each strategy turns one remote source into a stream of [`VerseRecord`]s
//! pushed into an [`IngestionBuffer`](crate::IngestionBuffer), and reports
//! which canonical books it observed.
//!
//! [`VerseRecord`]: alkitab_core::VerseRecord

pub mod bulk;
pub mod paginated;

pub use bulk::{BulkRecords, BulkStrategy};
pub use paginated::PaginatedStrategy;

use std::collections::HashSet;

/// What a strategy observed during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyOutcome {
    /// Canonical identifiers of observed books.
    pub observed: HashSet<u16>,
    /// Raw source names that did not normalize to a canonical book.
    pub unmapped: Vec<String>,
}
