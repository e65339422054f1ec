//! GraphQL chapter transport.
//!
//! Each request asks for one chapter of one book:
//!
//! ```graphql
//! query Chapter($version: Version!, $book: String!, $chapter: Int!) {
//!   passages(version: $version, book: $book, chapter: $chapter) {
//!     verses { verse type content }
//!   }
//! }
//! ```
//!
//! Only verses whose `type` is `content` are kept; headings and other entry
//! types are dropped. A missing `passages` object is an empty chapter.

use alkitab_core::traverse::{content_text, lenient_number};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::check_response;
use crate::{FetchClient, FetchError, PageVerse};

const CHAPTER_QUERY: &str = "query Chapter($version: Version!, $book: String!, $chapter: Int!) {
  passages(version: $version, book: $book, chapter: $chapter) {
    verses { verse type content }
  }
}";

#[derive(Serialize)]
struct ChapterRequest<'a> {
    query: &'static str,
    variables: ChapterVariables<'a>,
}

#[derive(Serialize)]
struct ChapterVariables<'a> {
    version: &'a str,
    book: &'a str,
    chapter: u32,
}

#[derive(Deserialize)]
struct ChapterResponse {
    #[serde(default)]
    data: Option<ChapterData>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct ChapterData {
    #[serde(default)]
    passages: Option<Passages>,
}

#[derive(Deserialize)]
struct Passages {
    #[serde(default)]
    verses: Option<Vec<GraphqlVerse>>,
}

#[derive(Deserialize)]
struct GraphqlVerse {
    #[serde(default)]
    verse: Value,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    content: Value,
}

impl FetchClient {
    /// POST the chapter query for `book` / `chapter`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Remote`] if the response carries a non-empty
    /// `errors` list, or another [`FetchError`] on transport, status, or
    /// parse failure.
    pub async fn fetch_graphql_chapter(
        &self,
        book: &str,
        chapter: u32,
    ) -> Result<Vec<PageVerse>, FetchError> {
        let body = ChapterRequest {
            query: CHAPTER_QUERY,
            variables: ChapterVariables {
                version: &self.endpoints.graphql_version,
                book,
                chapter,
            },
        };
        let resp = self
            .http
            .post(&self.endpoints.graphql_url)
            .timeout(self.endpoints.chapter_timeout)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let bytes = resp.bytes().await?;
        parse_chapter(&bytes, book, chapter)
    }
}

fn parse_chapter(body: &[u8], book: &str, chapter: u32) -> Result<Vec<PageVerse>, FetchError> {
    let data: ChapterResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if let Some(errors) = data.errors.filter(|e| !e.is_empty()) {
        return Err(FetchError::Remote {
            book: book.to_string(),
            chapter,
            message: Value::Array(errors).to_string(),
        });
    }

    let verses = data
        .data
        .and_then(|d| d.passages)
        .and_then(|p| p.verses)
        .unwrap_or_default();

    Ok(verses
        .into_iter()
        .filter(|v| v.kind.as_deref() == Some("content"))
        .map(|v| PageVerse {
            number: lenient_number(&v.verse),
            content: content_text(&v.content),
        })
        .collect())
}
