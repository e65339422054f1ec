//! # alkitab-fetch
//!
//! HTTP transports for the two corpus sources:
//! - a bulk JSON document containing the whole corpus in an unknown shape
//! - a GraphQL endpoint serving one chapter per request
//!
//! Both are exposed through traits ([`DocumentSource`], [`ChapterSource`]) so
//! the ingest crate can run against in-memory fakes.

pub mod bulk;
pub mod graphql;

mod error;
mod http;

pub use error::FetchError;

use std::time::Duration;

use alkitab_core::{DEFAULT_BULK_URL, DEFAULT_GRAPHQL_URL, DEFAULT_GRAPHQL_VERSION};
use async_trait::async_trait;
use serde_json::Value;

// ── Traits ─────────────────────────────────────────────────────────

/// A source that returns the whole corpus as one JSON document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch and parse the document.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, non-success status, or a
    /// body that is not JSON.
    async fn fetch_document(&self) -> Result<Value, FetchError>;
}

/// A source that returns one chapter's verses per request.
#[async_trait]
pub trait ChapterSource: Send + Sync {
    /// Fetch the content verses of one chapter. An empty result means the
    /// book has no such chapter.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Remote`] when the endpoint reports an
    /// application error, or another [`FetchError`] on transport failure.
    async fn fetch_chapter(&self, book: &str, chapter: u32) -> Result<Vec<PageVerse>, FetchError>;
}

/// One verse as returned by a chapter page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVerse {
    /// Verse number, `None` when the endpoint's value did not parse.
    pub number: Option<u32>,
    /// Verse text, `None` when missing.
    pub content: Option<String>,
}

// ── Client ─────────────────────────────────────────────────────────

/// Where and how to reach the remote sources.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub bulk_url: String,
    pub graphql_url: String,
    /// Bible version passed to the GraphQL query (e.g. `tb`).
    pub graphql_version: String,
    pub bulk_timeout: Duration,
    pub chapter_timeout: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            bulk_url: DEFAULT_BULK_URL.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            graphql_version: DEFAULT_GRAPHQL_VERSION.to_string(),
            bulk_timeout: Duration::from_secs(60),
            chapter_timeout: Duration::from_secs(30),
        }
    }
}

/// reqwest-backed client implementing both source traits.
pub struct FetchClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl FetchClient {
    /// Create a client for the given endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(endpoints: Endpoints) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("alkitab-seed/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoints })
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl DocumentSource for FetchClient {
    async fn fetch_document(&self) -> Result<Value, FetchError> {
        self.fetch_bulk_document().await
    }
}

#[async_trait]
impl ChapterSource for FetchClient {
    async fn fetch_chapter(&self, book: &str, chapter: u32) -> Result<Vec<PageVerse>, FetchError> {
        self.fetch_graphql_chapter(book, chapter).await
    }
}
