//! Run summary and completeness audit.

use std::fmt;

use serde::Serialize;

/// Which strategy produced the records of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Bulk,
    Paginated,
}

impl SourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::Paginated => "paginated",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Strategy whose records were written.
    pub source: SourceKind,
    /// Why the bulk source was abandoned, when automatic mode fell back.
    pub fallback_reason: Option<String>,
    /// Rows inserted, or rows that would have been inserted in a dry run.
    pub inserted: usize,
    pub batches: usize,
    pub dry_run: bool,
    pub observed_books: usize,
    /// Canonical books with nothing observed, in canonical order.
    pub missing_books: Vec<String>,
    /// Raw source names that matched no canonical book.
    pub unmapped_books: Vec<String>,
}

impl IngestReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_books.is_empty()
    }
}
