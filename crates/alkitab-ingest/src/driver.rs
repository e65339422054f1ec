//! Ingestion driver.
//!
//! One run moves through four phases:
//!
//! ```text
//! SELECT_STRATEGY → STREAM_RECORDS → FLUSH_FINAL → REPORT
//! ```
//!
//! In automatic mode the bulk source is tried first; a failure while fetching
//! or parsing the bulk document (or a document whose top level is not
//! understood) falls back to the paginated source. Bulk failures happen
//! before anything is buffered, so the fallback starts from an empty buffer.
//! Sink errors and paginated failures are always fatal.

use std::time::Duration;

use alkitab_core::{Catalog, Normalizer, SourceMode};
use alkitab_fetch::{ChapterSource, DocumentSource};
use alkitab_sink::VerseSink;

use crate::strategy::{BulkStrategy, PaginatedStrategy, StrategyOutcome};
use crate::{IngestError, IngestReport, IngestionBuffer, SourceKind};

/// Per-run settings.
#[derive(Debug, Clone)]
pub struct IngestSettings {
    pub mode: SourceMode,
    pub table: String,
    pub batch_size: usize,
    pub dry_run: bool,
    /// Delay between paginated chapter fetches.
    pub pace: Duration,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            mode: SourceMode::Auto,
            table: "bible_verses".to_string(),
            batch_size: 1000,
            dry_run: false,
            pace: Duration::ZERO,
        }
    }
}

/// Orchestrates one ingestion run against a pair of sources.
pub struct Ingestor<'a, D: ?Sized, C: ?Sized> {
    catalog: &'a Catalog,
    normalizer: &'a Normalizer,
    documents: &'a D,
    chapters: &'a C,
    settings: IngestSettings,
}

impl<'a, D, C> Ingestor<'a, D, C>
where
    D: DocumentSource + ?Sized,
    C: ChapterSource + ?Sized,
{
    pub const fn new(
        catalog: &'a Catalog,
        normalizer: &'a Normalizer,
        documents: &'a D,
        chapters: &'a C,
        settings: IngestSettings,
    ) -> Self {
        Self {
            catalog,
            normalizer,
            documents,
            chapters,
            settings,
        }
    }

    /// Run ingestion into `sink` and report what happened.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`IngestError`]. Batches flushed before the
    /// error stay committed.
    pub async fn run<S: VerseSink + ?Sized>(&self, sink: &mut S) -> Result<IngestReport, IngestError> {
        let settings = &self.settings;
        tracing::info!(
            mode = %settings.mode,
            table = %settings.table,
            batch_size = settings.batch_size,
            dry_run = settings.dry_run,
            "starting ingestion"
        );
        let mut buffer =
            IngestionBuffer::new(sink, &settings.table, settings.batch_size, settings.dry_run);

        let (source, fallback_reason, outcome) = match settings.mode {
            SourceMode::Bulk => (SourceKind::Bulk, None, self.run_bulk(&mut buffer).await?),
            SourceMode::Paginated => (
                SourceKind::Paginated,
                None,
                self.run_paginated(&mut buffer).await?,
            ),
            SourceMode::Auto => match self.run_bulk(&mut buffer).await {
                Ok(outcome) => (SourceKind::Bulk, None, outcome),
                Err(error) if error.allows_fallback() => {
                    tracing::warn!(%error, "bulk source failed, falling back to paginated source");
                    let outcome = self.run_paginated(&mut buffer).await?;
                    (SourceKind::Paginated, Some(error.to_string()), outcome)
                }
                Err(error) => return Err(error),
            },
        };

        buffer.flush().await?;
        let report = self.report(source, fallback_reason, &buffer, outcome);
        tracing::info!(
            source = %report.source,
            inserted = report.inserted,
            batches = report.batches,
            missing = report.missing_books.len(),
            "ingestion finished"
        );
        Ok(report)
    }

    async fn run_bulk<S: VerseSink + ?Sized>(
        &self,
        buffer: &mut IngestionBuffer<'_, S>,
    ) -> Result<StrategyOutcome, IngestError> {
        BulkStrategy::new(self.catalog, self.normalizer)
            .run(self.documents, buffer)
            .await
    }

    async fn run_paginated<S: VerseSink + ?Sized>(
        &self,
        buffer: &mut IngestionBuffer<'_, S>,
    ) -> Result<StrategyOutcome, IngestError> {
        PaginatedStrategy::new(self.catalog, self.settings.pace)
            .run(self.chapters, buffer)
            .await
    }

    fn report<S: VerseSink + ?Sized>(
        &self,
        source: SourceKind,
        fallback_reason: Option<String>,
        buffer: &IngestionBuffer<'_, S>,
        outcome: StrategyOutcome,
    ) -> IngestReport {
        let missing_books: Vec<String> = self
            .catalog
            .missing(&outcome.observed)
            .into_iter()
            .map(|book| {
                tracing::warn!(book = book.name, "missing source data");
                book.name.to_string()
            })
            .collect();

        IngestReport {
            source,
            fallback_reason,
            inserted: buffer.inserted(),
            batches: buffer.batches(),
            dry_run: self.settings.dry_run,
            observed_books: outcome.observed.len(),
            missing_books,
            unmapped_books: outcome.unmapped,
        }
    }
}
