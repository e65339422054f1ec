//! Destination sink configuration.

use serde::{Deserialize, Serialize};

fn default_table() -> String {
    "bible_verses".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SinkConfig {
    /// Supabase project URL (e.g., `https://abc.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Service-role or anon key. Also read from `SUPABASE_SERVICE_ROLE_KEY`
    /// or `SUPABASE_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Destination table.
    #[serde(default = "default_table")]
    pub table: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
        }
    }
}

impl SinkConfig {
    /// Check if the sink has the minimum required fields to insert rows.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = SinkConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.table, "bible_verses");
    }

    #[test]
    fn configured_when_url_and_key_set() {
        let config = SinkConfig {
            url: "https://abc.supabase.co".into(),
            api_key: "service-role".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
