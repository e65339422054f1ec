//! # alkitab-config
//!
//! Layered configuration loading for alkitab-seed using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ALKITAB_*` prefix, `__` as separator)
//! 2. Legacy environment variables: `SUPABASE_URL`,
//!    `SUPABASE_SERVICE_ROLE_KEY`, `SUPABASE_KEY`, `BIBLE_SOURCE_MODE`,
//!    `BIBLE_JSON_URL`, `BIBLE_GRAPHQL_URL`, `BIBLE_VERSES_TABLE`,
//!    `BIBLE_BATCH_SIZE`, `BIBLE_SLEEP_SECONDS`, `DRY_RUN`
//! 3. An explicit TOML file passed by the caller (`--config`)
//! 4. Project-level `./alkitab.toml`
//! 5. User-level `~/.config/alkitab/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ALKITAB_SOURCE__MODE` -> `source.mode`,
//! `ALKITAB_INGEST__BATCH_SIZE` -> `ingest.batch_size`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use alkitab_config::AlkitabConfig;
//!
//! let config = AlkitabConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("mode: {}", config.source.mode);
//! ```

mod error;
mod ingest;
mod legacy;
mod sink;
mod source;

pub use error::ConfigError;
pub use ingest::IngestConfig;
pub use sink::SinkConfig;
pub use source::SourceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "alkitab.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AlkitabConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub sink: SinkConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

impl AlkitabConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an extra TOML file layered above the project
    /// file.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment_with(extra).extract().map_err(ConfigError::from)
    }

    /// Build the default figment provider chain.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain, optionally including `extra`.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: SUPABASE_* and BIBLE_* names from the earlier seed script
        figment = legacy::merge(figment);

        // Layer 5: Environment variables (highest priority)
        figment.merge(Env::prefixed("ALKITAB_").split("__"))
    }

    /// Reject values no run can work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero batch size, zero
    /// timeouts, or an empty destination table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ingest.batch_size == 0 {
            return Err(invalid("ingest.batch_size", "must be at least 1"));
        }
        if self.source.bulk_timeout_secs == 0 {
            return Err(invalid("source.bulk_timeout_secs", "must be at least 1"));
        }
        if self.source.chapter_timeout_secs == 0 {
            return Err(invalid("source.chapter_timeout_secs", "must be at least 1"));
        }
        if self.sink.table.trim().is_empty() {
            return Err(invalid("sink.table", "must not be empty"));
        }
        Ok(())
    }

    /// Require sink credentials. Dry runs never touch the sink and skip this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSinkCredential`] naming the first unset
    /// field (URL before key).
    pub fn require_sink(&self) -> Result<&SinkConfig, ConfigError> {
        if self.sink.url.trim().is_empty() {
            return Err(ConfigError::MissingSinkCredential {
                field: "url",
                env: "SUPABASE_URL or ALKITAB_SINK__URL",
            });
        }
        if self.sink.api_key.trim().is_empty() {
            return Err(ConfigError::MissingSinkCredential {
                field: "api_key",
                env: "SUPABASE_SERVICE_ROLE_KEY or ALKITAB_SINK__API_KEY",
            });
        }
        Ok(&self.sink)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("alkitab").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alkitab_core::SourceMode;

    #[test]
    fn default_config_is_valid() {
        let config = AlkitabConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.sink.is_configured());
        assert_eq!(config.source.mode, SourceMode::Auto);
        assert_eq!(config.ingest.batch_size, 1000);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let mut config = AlkitabConfig::default();
        config.ingest.batch_size = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "ingest.batch_size"));
    }

    #[test]
    fn blank_table_is_rejected() {
        let mut config = AlkitabConfig::default();
        config.sink.table = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn require_sink_names_the_missing_field() {
        let mut config = AlkitabConfig::default();
        let err = config.require_sink().unwrap_err();
        assert!(matches!(err, ConfigError::MissingSinkCredential { field: "url", .. }));

        config.sink.url = "https://abc.supabase.co".into();
        config.sink.api_key = "   ".into();
        let err = config.require_sink().unwrap_err();
        assert!(matches!(err, ConfigError::MissingSinkCredential { field: "api_key", .. }));

        config.sink.api_key = "service-role".into();
        assert!(config.require_sink().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: AlkitabConfig = AlkitabConfig::figment().extract()?;
            assert_eq!(config.sink.table, "bible_verses");
            assert_eq!(config.source.pace_ms, 0);
            Ok(())
        });
    }
}
