//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use alkitab_config::AlkitabConfig;
use alkitab_core::SourceMode;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[source]
mode = "graphql"
bulk_url = "https://example.org/tb.json"
graphql_url = "https://example.org/graphql"
graphql_version = "bis"
pace_ms = 250

[sink]
url = "https://abc.supabase.co"
api_key = "service-role"
table = "ayat"

[ingest]
batch_size = 500
dry_run = true
"#,
        )?;

        let config: AlkitabConfig = Figment::from(Serialized::defaults(AlkitabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.source.mode, SourceMode::Paginated);
        assert_eq!(config.source.bulk_url, "https://example.org/tb.json");
        assert_eq!(config.source.graphql_url, "https://example.org/graphql");
        assert_eq!(config.source.graphql_version, "bis");
        assert_eq!(config.source.pace_ms, 250);
        assert_eq!(config.source.bulk_timeout_secs, 60);
        assert_eq!(config.sink.table, "ayat");
        assert!(config.sink.is_configured());
        assert_eq!(config.ingest.batch_size, 500);
        assert!(config.ingest.dry_run);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "alkitab.toml",
            r#"
[source]
mode = "bulk"

[ingest]
batch_size = 10
"#,
        )?;

        let config = AlkitabConfig::load().expect("config loads");
        assert_eq!(config.source.mode, SourceMode::Bulk);
        assert_eq!(config.ingest.batch_size, 10);
        assert_eq!(config.sink.table, "bible_verses");
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("alkitab.toml", "[ingest]\nbatch_size = 10\n")?;
        jail.create_file("override.toml", "[ingest]\nbatch_size = 20\n")?;

        let config =
            AlkitabConfig::load_from(Some(std::path::Path::new("override.toml"))).expect("config loads");
        assert_eq!(config.ingest.batch_size, 20);
        Ok(())
    });
}

#[test]
fn unknown_mode_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file("alkitab.toml", "[source]\nmode = \"ftp\"\n")?;
        assert!(AlkitabConfig::load().is_err());
        Ok(())
    });
}
