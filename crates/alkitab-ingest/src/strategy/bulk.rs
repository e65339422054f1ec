//! Bulk strategy: one document, traversed in full.
//!
//! ```text
//! books_of → normalize → resolve ─(unmapped: skip, remember)
//!          → chapters_of ─(no number: skip)
//!          → verses_of ─(no number / empty text: skip)
//!          → VerseRecord
//! ```

use alkitab_core::traverse::{books_of, chapters_of, verses_of};
use alkitab_core::{Catalog, Normalizer, VerseRecord};
use alkitab_fetch::DocumentSource;
use alkitab_sink::VerseSink;
use serde_json::Value;

use super::StrategyOutcome;
use crate::{IngestError, IngestionBuffer};

type BookRecords<'d> = Box<dyn Iterator<Item = VerseRecord> + Send + 'd>;

/// Reads every verse out of a bulk document.
#[derive(Debug, Clone, Copy)]
pub struct BulkStrategy<'a> {
    catalog: &'a Catalog,
    normalizer: &'a Normalizer,
}

impl<'a> BulkStrategy<'a> {
    pub const fn new(catalog: &'a Catalog, normalizer: &'a Normalizer) -> Self {
        Self {
            catalog,
            normalizer,
        }
    }

    /// Lazy record sequence over `document`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnrecognizedDocument`] if the top level matches
    /// none of the known book shapes.
    pub fn records<'d>(&self, document: &'d Value) -> Result<BulkRecords<'d>, IngestError>
    where
        'a: 'd,
    {
        let books = books_of(document);
        if !books.is_recognized() {
            return Err(IngestError::UnrecognizedDocument(kind_of(document)));
        }
        Ok(BulkRecords {
            strategy: *self,
            books,
            current: None,
            outcome: StrategyOutcome::default(),
        })
    }

    /// Fetch the document from `source` and stream its records into `buffer`.
    ///
    /// # Errors
    ///
    /// [`IngestError::Bulk`] or [`IngestError::UnrecognizedDocument`] before
    /// anything is buffered; [`IngestError::Sink`] if a flush fails.
    pub async fn run<D, S>(
        &self,
        source: &D,
        buffer: &mut IngestionBuffer<'_, S>,
    ) -> Result<StrategyOutcome, IngestError>
    where
        D: DocumentSource + ?Sized,
        S: VerseSink + ?Sized,
    {
        let document = source.fetch_document().await.map_err(IngestError::Bulk)?;
        let mut records = self.records(&document)?;
        for record in records.by_ref() {
            buffer.push(record).await?;
        }
        Ok(records.finish())
    }
}

/// Iterator over the records of one bulk document.
///
/// Tracks observed and unmapped books as it goes; call
/// [`BulkRecords::finish`] after exhausting it to collect them.
pub struct BulkRecords<'d> {
    strategy: BulkStrategy<'d>,
    books: alkitab_core::traverse::Books<'d>,
    current: Option<BookRecords<'d>>,
    outcome: StrategyOutcome,
}

impl BulkRecords<'_> {
    #[must_use]
    pub fn finish(self) -> StrategyOutcome {
        self.outcome
    }
}

impl Iterator for BulkRecords<'_> {
    type Item = VerseRecord;

    fn next(&mut self) -> Option<VerseRecord> {
        loop {
            if let Some(record) = self.current.as_mut().and_then(Iterator::next) {
                return Some(record);
            }
            let book = self.books.next()?;
            let name = self.strategy.normalizer.normalize(&book.name);
            let Some(book_id) = self.strategy.catalog.resolve(name.as_str()) else {
                tracing::info!(raw = %book.name, normalized = %name, "skipping unmapped book");
                self.outcome.unmapped.push(book.name.into_owned());
                self.current = None;
                continue;
            };
            self.outcome.observed.insert(book_id);
            self.current = Some(book_records(book_id, name.into_string(), book.chapters));
        }
    }
}

fn book_records(book_id: u16, book: String, chapters: &Value) -> BookRecords<'_> {
    let chapters = chapters_of(chapters);
    if !chapters.is_recognized() {
        tracing::debug!(%book, "chapters value has an unrecognized shape");
    }
    Box::new(
        chapters
            .filter_map(move |chapter| {
                if chapter.number.is_none() {
                    tracing::debug!(%book, "skipping chapter without a number");
                }
                Some((chapter.number?, chapter.verses))
            })
            .flat_map(move |(chapter, verses)| {
                verses_of(verses).filter_map(move |verse| {
                    VerseRecord::new(book_id, chapter, verse.number?, &verse.content)
                })
            }),
    )
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeDocument, RecordingSink};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn strategy_parts() -> (Catalog, Normalizer) {
        (Catalog::standard(), Normalizer::standard())
    }

    #[test]
    fn emits_records_for_resolved_books() {
        let (catalog, normalizer) = strategy_parts();
        let strategy = BulkStrategy::new(&catalog, &normalizer);
        let document = json!({"books": [
            {"book_name": "I Samuel", "chapters": [
                {"chapter": 1, "verses": [
                    {"verse": 1, "content": "Ada seorang laki-laki"},
                    {"verse": 2, "content": "   "},
                ]},
            ]},
            {"book_name": "Kitab Yasher", "chapters": [["lost"]]},
            {"book_name": "Ayub", "chapters": {"2": {"1": "Pada suatu hari"}, "x": {"1": "nope"}}},
        ]});

        let mut records = strategy.records(&document).unwrap();
        let collected: Vec<VerseRecord> = records.by_ref().collect();
        assert_eq!(
            collected,
            vec![
                VerseRecord::new(9, 1, 1, "Ada seorang laki-laki").unwrap(),
                VerseRecord::new(22, 2, 1, "Pada suatu hari").unwrap(),
            ]
        );

        let outcome = records.finish();
        assert_eq!(outcome.observed, [9, 22].into_iter().collect());
        assert_eq!(outcome.unmapped, vec!["Kitab Yasher".to_string()]);
    }

    #[test]
    fn resolved_book_without_verses_is_still_observed() {
        let (catalog, normalizer) = strategy_parts();
        let strategy = BulkStrategy::new(&catalog, &normalizer);
        let document = json!({"Rut": "unexpected"});
        let mut records = strategy.records(&document).unwrap();
        assert_eq!(records.by_ref().count(), 0);
        assert!(records.finish().observed.contains(&8));
    }

    #[test]
    fn records_are_restartable() {
        let (catalog, normalizer) = strategy_parts();
        let strategy = BulkStrategy::new(&catalog, &normalizer);
        let document = json!([{"name": "Yudas", "chapter": [["a", "b"]]}]);
        let first: Vec<VerseRecord> = strategy.records(&document).unwrap().collect();
        let second: Vec<VerseRecord> = strategy.records(&document).unwrap().collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_top_level_is_an_error() {
        let (catalog, normalizer) = strategy_parts();
        let strategy = BulkStrategy::new(&catalog, &normalizer);
        let document = json!("<html>");
        let err = strategy.records(&document).err().unwrap();
        assert!(matches!(err, IngestError::UnrecognizedDocument("a string")));
    }

    #[tokio::test]
    async fn run_streams_into_buffer() {
        let (catalog, normalizer) = strategy_parts();
        let strategy = BulkStrategy::new(&catalog, &normalizer);
        let source = FakeDocument::Ok(json!({"Wahyu Yohanes": [["satu", "dua", "tiga"]]}));
        let mut sink = RecordingSink::default();
        let mut buffer = IngestionBuffer::new(&mut sink, "t", 2, false);

        let outcome = strategy.run(&source, &mut buffer).await.unwrap();
        buffer.flush().await.unwrap();

        assert!(outcome.observed.contains(&73));
        assert_eq!(sink.batch_sizes(), vec![2, 1]);
        assert_eq!(sink.batches[1][0].content, "tiga");
    }

    #[tokio::test]
    async fn fetch_failure_is_a_bulk_error() {
        let (catalog, normalizer) = strategy_parts();
        let strategy = BulkStrategy::new(&catalog, &normalizer);
        let mut sink = RecordingSink::default();
        let mut buffer = IngestionBuffer::new(&mut sink, "t", 2, false);
        let err = strategy
            .run(&FakeDocument::Status(503), &mut buffer)
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Bulk(_)));
        assert_eq!(buffer.pending(), 0);
    }
}
