//! Source mode selection for an ingestion run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Default location of the bulk TB document.
pub const DEFAULT_BULK_URL: &str =
    "https://raw.githubusercontent.com/songofege/alkitab-json/master/edisi/tb/tb.json";

/// Default GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://bible.sonnylab.com/";

/// Bible version requested from the GraphQL endpoint unless configured.
pub const DEFAULT_GRAPHQL_VERSION: &str = "tb";

/// Which remote source an ingestion run reads from.
///
/// ```text
/// auto      → bulk ──(fetch/parse failure)──→ paginated
/// bulk      → bulk only, failure is fatal
/// paginated → paginated only
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SourceMode {
    #[default]
    Auto,
    Bulk,
    Paginated,
}

impl SourceMode {
    /// Return the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Bulk => "bulk",
            Self::Paginated => "paginated",
        }
    }

    /// Whether a bulk-path failure may fall back to the paginated source.
    #[must_use]
    pub const fn falls_back(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "bulk" | "bulk-only" | "bulk_only" | "json" => Ok(Self::Bulk),
            "paginated" | "paginated-only" | "paginated_only" | "graphql" => Ok(Self::Paginated),
            _ => Err(CoreError::UnknownSourceMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for SourceMode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SourceMode> for String {
    fn from(mode: SourceMode) -> Self {
        mode.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("auto", SourceMode::Auto)]
    #[case("AUTO", SourceMode::Auto)]
    #[case("json", SourceMode::Bulk)]
    #[case("bulk-only", SourceMode::Bulk)]
    #[case(" graphql ", SourceMode::Paginated)]
    #[case("paginated_only", SourceMode::Paginated)]
    fn parses_mode_aliases(#[case] input: &str, #[case] expected: SourceMode) {
        assert_eq!(input.parse::<SourceMode>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "ftp".parse::<SourceMode>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSourceMode(ref m) if m == "ftp"));
    }

    #[test]
    fn serde_uses_aliases_and_canonical_output() {
        let mode: SourceMode = serde_json::from_str("\"graphql\"").unwrap();
        assert_eq!(mode, SourceMode::Paginated);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"paginated\"");
    }

    #[test]
    fn only_auto_falls_back() {
        assert!(SourceMode::Auto.falls_back());
        assert!(!SourceMode::Bulk.falls_back());
        assert!(!SourceMode::Paginated.falls_back());
    }
}
