//! The flat verse record written to the destination table.

use serde::{Deserialize, Serialize};

/// One verse, keyed by canonical book identifier.
///
/// Construct through [`VerseRecord::new`], which rejects zero chapter/verse
/// numbers and blank content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub book_id: u16,
    pub chapter: u32,
    pub verse: u32,
    pub content: String,
}

impl VerseRecord {
    /// Build a record, trimming `content`. Returns `None` when the chapter or
    /// verse number is zero or the trimmed content is empty.
    #[must_use]
    pub fn new(book_id: u16, chapter: u32, verse: u32, content: &str) -> Option<Self> {
        let content = content.trim();
        if chapter == 0 || verse == 0 || content.is_empty() {
            return None;
        }
        Some(Self {
            book_id,
            chapter,
            verse,
            content: content.to_string(),
        })
    }
}
