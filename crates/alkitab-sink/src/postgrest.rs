//! Supabase / PostgREST sink.
//!
//! Rows are POSTed as a JSON array to `{url}/rest/v1/{table}` with the
//! project key in both the `apikey` and bearer `Authorization` headers.
//! `Prefer: return=minimal` keeps successful responses empty. A non-success
//! status, or a body carrying a non-empty `error`, `errors`, or `message`
//! field, fails the batch.

use alkitab_core::VerseRecord;
use async_trait::async_trait;
use serde_json::Value;

use crate::{SinkError, VerseSink};

/// Batch-insert client for a Supabase project.
pub struct PostgrestSink {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl std::fmt::Debug for PostgrestSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgrestSink")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl PostgrestSink {
    /// Create a sink for the project at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::NotConfigured`] if `url` or `api_key` is empty,
    /// or [`SinkError::Http`] if the HTTP client fails to build.
    pub fn new(url: &str, api_key: &str) -> Result<Self, SinkError> {
        if url.trim().is_empty() {
            return Err(SinkError::NotConfigured("url"));
        }
        if api_key.trim().is_empty() {
            return Err(SinkError::NotConfigured("api_key"));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("alkitab-seed/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }
}

#[async_trait]
impl VerseSink for PostgrestSink {
    async fn insert_batch(&mut self, table: &str, rows: &[VerseRecord]) -> Result<usize, SinkError> {
        if rows.is_empty() {
            return Ok(0);
        }
        let resp = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let success = resp.status().is_success();
        let body = resp.text().await?;

        if let Some(message) = rejection_message(success, &body) {
            return Err(SinkError::Rejected {
                table: table.to_string(),
                status,
                message,
            });
        }

        tracing::debug!(table, rows = rows.len(), "batch inserted");
        Ok(rows.len())
    }
}

/// Decide whether a response rejects the batch, returning the diagnostic.
fn rejection_message(success: bool, body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<Value>(body).ok();
    let field = parsed.as_ref().and_then(|value| {
        ["error", "errors", "message"]
            .iter()
            .filter_map(|key| value.get(*key))
            .find(|v| match v {
                Value::Null => false,
                Value::String(s) => !s.is_empty(),
                Value::Array(a) => !a.is_empty(),
                Value::Object(o) => !o.is_empty(),
                Value::Bool(b) => *b,
                Value::Number(_) => true,
            })
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
    });

    match (success, field) {
        (_, Some(message)) => Some(message),
        (false, None) if body.trim().is_empty() => Some("empty response".to_string()),
        (false, None) => Some(body.to_string()),
        (true, None) => None,
    }
}
