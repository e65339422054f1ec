//! In-memory fakes for the source and sink traits.

use std::collections::HashMap;
use std::sync::Mutex;

use alkitab_core::VerseRecord;
use alkitab_fetch::{ChapterSource, DocumentSource, FetchError, PageVerse};
use alkitab_sink::{SinkError, VerseSink};
use async_trait::async_trait;
use serde_json::Value;

pub fn record(book_id: u16, chapter: u32, verse: u32) -> VerseRecord {
    VerseRecord::new(book_id, chapter, verse, &format!("ayat {chapter}:{verse}")).unwrap()
}

/// Bulk source returning a fixed outcome on every call.
pub enum FakeDocument {
    Ok(Value),
    Status(u16),
}

#[async_trait]
impl DocumentSource for FakeDocument {
    async fn fetch_document(&self) -> Result<Value, FetchError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Status(status) => Err(FetchError::Api {
                status: *status,
                message: "unavailable".to_string(),
            }),
        }
    }
}

/// Chapter source serving pages from a map; unknown chapters are empty.
#[derive(Default)]
pub struct FakeChapters {
    pages: HashMap<(String, u32), Vec<PageVerse>>,
    errors: HashMap<(String, u32), String>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeChapters {
    pub fn with_chapter(self, book: &str, chapter: u32, verses: &[&str]) -> Self {
        let raw = verses
            .iter()
            .zip(1..)
            .map(|(text, number)| (Some(number), Some(*text)))
            .collect();
        self.with_raw_chapter(book, chapter, raw)
    }

    pub fn with_raw_chapter(
        mut self,
        book: &str,
        chapter: u32,
        verses: Vec<(Option<u32>, Option<&str>)>,
    ) -> Self {
        let page = verses
            .into_iter()
            .map(|(number, content)| PageVerse {
                number,
                content: content.map(str::to_string),
            })
            .collect();
        self.pages.insert((book.to_string(), chapter), page);
        self
    }

    pub fn with_remote_error(mut self, book: &str, chapter: u32, message: &str) -> Self {
        self.errors
            .insert((book.to_string(), chapter), message.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn chapters_requested(&self, book: &str) -> Vec<u32> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(b, _)| b == book)
            .map(|(_, c)| *c)
            .collect()
    }
}

#[async_trait]
impl ChapterSource for FakeChapters {
    async fn fetch_chapter(&self, book: &str, chapter: u32) -> Result<Vec<PageVerse>, FetchError> {
        self.calls.lock().unwrap().push((book.to_string(), chapter));
        let key = (book.to_string(), chapter);
        if let Some(message) = self.errors.get(&key) {
            return Err(FetchError::Remote {
                book: book.to_string(),
                chapter,
                message: message.clone(),
            });
        }
        Ok(self.pages.get(&key).cloned().unwrap_or_default())
    }
}

/// Sink that records every batch. Optionally rejects batches after the
/// first `accept` ones.
#[derive(Default)]
pub struct RecordingSink {
    pub batches: Vec<Vec<VerseRecord>>,
    pub tables: Vec<String>,
    accept: Option<usize>,
}

impl RecordingSink {
    pub fn failing_after(accept: usize) -> Self {
        Self {
            accept: Some(accept),
            ..Self::default()
        }
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches.iter().map(Vec::len).collect()
    }
}

#[async_trait]
impl VerseSink for RecordingSink {
    async fn insert_batch(&mut self, table: &str, rows: &[VerseRecord]) -> Result<usize, SinkError> {
        if self.accept.is_some_and(|accept| self.batches.len() >= accept) {
            return Err(SinkError::Rejected {
                table: table.to_string(),
                status: 409,
                message: "duplicate key value violates unique constraint".to_string(),
            });
        }
        self.batches.push(rows.to_vec());
        self.tables.push(table.to_string());
        Ok(rows.len())
    }
}
