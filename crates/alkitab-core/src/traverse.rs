//! Shape-tolerant traversal of book → chapter → verse JSON documents.
//!
//! Public corpora encode the same hierarchy in several ways: a `books` list
//! of objects, a bare list, a map keyed by book name, chapters and verses as
//! lists of objects, lists of scalars, or maps keyed by number, with field
//! names in English or Indonesian. Each level is read with an ordered list of
//! accessor attempts ([`Fields`]); the first one holding a present value wins.
//!
//! A value that matches none of a level's shapes produces
//! [`Shape::Unrecognized`], which iterates as empty. Callers that care (the
//! bulk source checks the top level) can branch on it explicitly.

use std::borrow::Cow;

use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Ordered field-name candidates for one logical field.
#[derive(Debug, Clone, Copy)]
pub struct Fields(pub &'static [&'static str]);

impl Fields {
    /// First candidate field holding a present value.
    #[must_use]
    pub fn first<'a>(&self, object: &'a Map<String, Value>) -> Option<&'a Value> {
        self.0
            .iter()
            .filter_map(|key| object.get(*key))
            .find(|value| is_present(value))
    }
}

pub const BOOK_NAME: Fields = Fields(&["book_name", "name", "nama", "book"]);
pub const BOOK_CHAPTERS: Fields = Fields(&["chapters", "chapter", "pasal", "chap"]);
pub const CHAPTER_NUMBER: Fields = Fields(&["chapter", "no", "pasal", "chapter_number"]);
pub const CHAPTER_VERSES: Fields = Fields(&["verses", "ayat", "ayat_ayat", "items", "content"]);
pub const VERSE_NUMBER: Fields = Fields(&["verse", "ayat", "no", "number"]);
pub const VERSE_CONTENT: Fields = Fields(&["content", "text", "isi", "value"]);

/// Whether a field value counts as present.
///
/// `null`, `false`, zero, and empty strings, lists, and objects do not.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Leniently read a positive chapter or verse number.
///
/// Accepts unsigned integers, integral floats, and numeric strings. Anything
/// else, including zero, is `None`.
#[must_use]
pub fn lenient_number(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| integral_float(n.as_f64()?))
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0),
        Value::String(s) => number_key(s),
        _ => None,
    }
}

/// Parse a map key (or any string) as a positive number.
#[must_use]
pub fn number_key(key: &str) -> Option<u32> {
    key.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integral_float(f: f64) -> Option<u64> {
    (f.fract() == 0.0 && f > 0.0 && f <= f64::from(u32::MAX)).then_some(f as u64)
}

/// Read a scalar as verse text. Strings are trimmed; numbers and booleans use
/// their display form. `null`, lists, and objects are not text.
#[must_use]
pub fn content_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn position(index: usize) -> Option<u32> {
    u32::try_from(index + 1).ok()
}

/// Outcome of matching a value against the shapes a level understands.
pub enum Shape<I> {
    Recognized(I),
    Unrecognized,
}

impl<I> Shape<I> {
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }
}

impl<I: Iterator> Iterator for Shape<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Recognized(inner) => inner.next(),
            Self::Unrecognized => None,
        }
    }
}

/// A book as found in the source, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBook<'a> {
    pub name: Cow<'a, str>,
    pub chapters: &'a Value,
}

/// A chapter entry. `number` is `None` when it could not be determined.
#[derive(Debug, Clone, PartialEq)]
pub struct RawChapter<'a> {
    pub number: Option<u32>,
    pub verses: &'a Value,
}

/// A verse entry with trimmed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVerse {
    pub number: Option<u32>,
    pub content: String,
}

pub type Books<'a> = Shape<Box<dyn Iterator<Item = RawBook<'a>> + Send + 'a>>;
pub type Chapters<'a> = Shape<Box<dyn Iterator<Item = RawChapter<'a>> + Send + 'a>>;
pub type Verses<'a> = Shape<Box<dyn Iterator<Item = RawVerse> + Send + 'a>>;

/// Books in a document.
///
/// Recognized shapes:
/// - `{"books": [{"book_name": .., "chapters": ..}, ..]}`
/// - `[{"name": .., "chapter": ..}, ..]`
/// - `{"Kejadian": <chapters>, ..}`
///
/// List entries that are not objects or carry no name are skipped.
#[must_use]
pub fn books_of(document: &Value) -> Books<'_> {
    match document {
        Value::Object(map) => match map.get("books") {
            Some(Value::Array(list)) => Shape::Recognized(Box::new(book_entries(list))),
            Some(_) => Shape::Unrecognized,
            None => Shape::Recognized(Box::new(map.iter().map(|(name, chapters)| RawBook {
                name: Cow::Borrowed(name.as_str()),
                chapters,
            }))),
        },
        Value::Array(list) => Shape::Recognized(Box::new(book_entries(list))),
        _ => Shape::Unrecognized,
    }
}

fn book_entries(list: &[Value]) -> impl Iterator<Item = RawBook<'_>> {
    list.iter().filter_map(|entry| {
        let object = entry.as_object()?;
        let name = match BOOK_NAME.first(object)? {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(content_text(other)?),
        };
        Some(RawBook {
            name,
            chapters: BOOK_CHAPTERS.first(object).unwrap_or(&NULL),
        })
    })
}

/// Chapters in a book's chapters value.
///
/// A list yields one chapter per element: objects carry their number and
/// verses in named fields (number falls back to the 1-based position), any
/// other element is itself the verses value. An object is keyed by chapter
/// number; keys that do not parse yield `number: None`.
#[must_use]
pub fn chapters_of(chapters: &Value) -> Chapters<'_> {
    match chapters {
        Value::Array(list) => Shape::Recognized(Box::new(list.iter().enumerate().map(
            |(index, entry)| match entry {
                Value::Object(object) => RawChapter {
                    number: CHAPTER_NUMBER
                        .first(object)
                        .and_then(lenient_number)
                        .or_else(|| position(index)),
                    verses: CHAPTER_VERSES.first(object).unwrap_or(&NULL),
                },
                other => RawChapter {
                    number: position(index),
                    verses: other,
                },
            },
        ))),
        Value::Object(map) => Shape::Recognized(Box::new(map.iter().map(|(key, verses)| {
            RawChapter {
                number: number_key(key),
                verses,
            }
        }))),
        _ => Shape::Unrecognized,
    }
}

/// Verses in a chapter's verses value.
///
/// Mirrors [`chapters_of`]: a list of objects (number falls back to position,
/// text from a content field), a list of scalars taken as text, or an object
/// keyed by verse number. Entries without text are dropped.
#[must_use]
pub fn verses_of(verses: &Value) -> Verses<'_> {
    match verses {
        Value::Array(list) => Shape::Recognized(Box::new(list.iter().enumerate().filter_map(
            |(index, entry)| match entry {
                Value::Object(object) => Some(RawVerse {
                    number: VERSE_NUMBER
                        .first(object)
                        .and_then(lenient_number)
                        .or_else(|| position(index)),
                    content: content_text(VERSE_CONTENT.first(object)?)?,
                }),
                other => Some(RawVerse {
                    number: position(index),
                    content: content_text(other)?,
                }),
            },
        ))),
        Value::Object(map) => Shape::Recognized(Box::new(map.iter().filter_map(
            |(key, content)| {
                Some(RawVerse {
                    number: number_key(key),
                    content: content_text(content)?,
                })
            },
        ))),
        _ => Shape::Unrecognized,
    }
}
