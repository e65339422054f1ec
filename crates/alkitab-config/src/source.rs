//! Remote source configuration.

use alkitab_core::{DEFAULT_BULK_URL, DEFAULT_GRAPHQL_URL, DEFAULT_GRAPHQL_VERSION, SourceMode};
use serde::{Deserialize, Serialize};

fn default_bulk_url() -> String {
    DEFAULT_BULK_URL.to_string()
}

fn default_graphql_url() -> String {
    DEFAULT_GRAPHQL_URL.to_string()
}

fn default_graphql_version() -> String {
    DEFAULT_GRAPHQL_VERSION.to_string()
}

const fn default_bulk_timeout_secs() -> u64 {
    60
}

const fn default_chapter_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// `auto`, `bulk`, or `paginated` (aliases: `json`, `graphql`).
    #[serde(default)]
    pub mode: SourceMode,

    /// Location of the bulk JSON document.
    #[serde(default = "default_bulk_url")]
    pub bulk_url: String,

    /// GraphQL endpoint serving one chapter per request.
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,

    /// Bible version passed to the GraphQL query.
    #[serde(default = "default_graphql_version")]
    pub graphql_version: String,

    #[serde(default = "default_bulk_timeout_secs")]
    pub bulk_timeout_secs: u64,

    #[serde(default = "default_chapter_timeout_secs")]
    pub chapter_timeout_secs: u64,

    /// Delay between successive chapter fetches, in milliseconds.
    #[serde(default)]
    pub pace_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::default(),
            bulk_url: default_bulk_url(),
            graphql_url: default_graphql_url(),
            graphql_version: default_graphql_version(),
            bulk_timeout_secs: default_bulk_timeout_secs(),
            chapter_timeout_secs: default_chapter_timeout_secs(),
            pace_ms: 0,
        }
    }
}
