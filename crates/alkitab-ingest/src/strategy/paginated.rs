//! Paginated strategy: one request per chapter.
//!
//! Books are walked in catalog order. For each book, chapters 1, 2, … are
//! fetched until a page comes back empty, which ends the book. Any fetch
//! error (including an application-level error from the endpoint) aborts the
//! run; nothing is retried.

use std::time::Duration;

use alkitab_core::{CanonicalBook, Catalog, VerseRecord};
use alkitab_fetch::ChapterSource;
use alkitab_sink::VerseSink;

use super::StrategyOutcome;
use crate::{IngestError, IngestionBuffer};

#[derive(Debug, Clone, Copy)]
pub struct PaginatedStrategy<'a> {
    catalog: &'a Catalog,
    pace: Duration,
}

impl<'a> PaginatedStrategy<'a> {
    /// `pace` is slept after every non-empty chapter; zero disables it.
    pub const fn new(catalog: &'a Catalog, pace: Duration) -> Self {
        Self { catalog, pace }
    }

    /// Fetch every book chapter by chapter and stream records into `buffer`.
    ///
    /// # Errors
    ///
    /// [`IngestError::Paginated`] naming the book and chapter whose fetch
    /// failed, or [`IngestError::Sink`] if a flush fails.
    pub async fn run<C, S>(
        &self,
        source: &C,
        buffer: &mut IngestionBuffer<'_, S>,
    ) -> Result<StrategyOutcome, IngestError>
    where
        C: ChapterSource + ?Sized,
        S: VerseSink + ?Sized,
    {
        let mut outcome = StrategyOutcome::default();
        for book in self.catalog.iter() {
            let chapters = self.run_book(book, source, buffer).await?;
            tracing::debug!(book = book.name, chapters, "book finished");
            if chapters > 0 {
                outcome.observed.insert(book.id);
            }
        }
        Ok(outcome)
    }

    /// Returns the number of non-empty chapters.
    async fn run_book<C, S>(
        &self,
        book: &CanonicalBook,
        source: &C,
        buffer: &mut IngestionBuffer<'_, S>,
    ) -> Result<u32, IngestError>
    where
        C: ChapterSource + ?Sized,
        S: VerseSink + ?Sized,
    {
        let mut chapter = 1;
        loop {
            let page = source
                .fetch_chapter(book.name, chapter)
                .await
                .map_err(|source| IngestError::Paginated {
                    book: book.name.to_string(),
                    chapter,
                    source,
                })?;
            if page.is_empty() {
                return Ok(chapter - 1);
            }

            for verse in page {
                let record = verse.number.and_then(|number| {
                    VerseRecord::new(book.id, chapter, number, verse.content.as_deref()?)
                });
                match record {
                    Some(record) => buffer.push(record).await?,
                    None => tracing::debug!(book = book.name, chapter, "skipping incomplete verse"),
                }
            }

            chapter += 1;
            if !self.pace.is_zero() {
                tokio::time::sleep(self.pace).await;
            }
        }
    }
}
