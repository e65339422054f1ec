use std::time::Duration;

use alkitab_config::AlkitabConfig;
use alkitab_core::{Catalog, Normalizer};
use alkitab_fetch::{Endpoints, FetchClient};
use alkitab_ingest::{IngestSettings, Ingestor};
use alkitab_sink::{DiscardSink, PostgrestSink, VerseSink};
use anyhow::Context;

use crate::cli::{GlobalFlags, SeedArgs};
use crate::output::output;

/// Handle `alkitab-seed seed`.
pub async fn handle(
    args: &SeedArgs,
    config: AlkitabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let config = apply_overrides(config, args);
    config.validate()?;

    let mut sink = build_sink(&config)?;
    let client = FetchClient::new(endpoints(&config)).context("failed to build HTTP client")?;

    let catalog = Catalog::standard();
    let normalizer = Normalizer::standard();
    let ingestor = Ingestor::new(&catalog, &normalizer, &client, &client, settings(&config));
    let report = ingestor
        .run(sink.as_mut())
        .await
        .context("ingestion failed")?;

    output(&report, flags.format)
}

fn apply_overrides(mut config: AlkitabConfig, args: &SeedArgs) -> AlkitabConfig {
    if let Some(mode) = args.mode {
        config.source.mode = mode;
    }
    if args.dry_run {
        config.ingest.dry_run = true;
    }
    if let Some(batch_size) = args.batch_size {
        config.ingest.batch_size = batch_size;
    }
    if let Some(table) = &args.table {
        config.sink.table.clone_from(table);
    }
    if let Some(url) = &args.bulk_url {
        config.source.bulk_url.clone_from(url);
    }
    if let Some(url) = &args.graphql_url {
        config.source.graphql_url.clone_from(url);
    }
    if let Some(pace_ms) = args.pace_ms {
        config.source.pace_ms = pace_ms;
    }
    config
}

/// Dry runs never write, so they get a [`DiscardSink`] and need no
/// credentials. Everything else fails here, before any fetch, when the sink
/// is not configured.
fn build_sink(config: &AlkitabConfig) -> anyhow::Result<Box<dyn VerseSink>> {
    if config.ingest.dry_run {
        return Ok(Box::new(DiscardSink));
    }
    let sink = config.require_sink()?;
    Ok(Box::new(PostgrestSink::new(&sink.url, &sink.api_key)?))
}

fn endpoints(config: &AlkitabConfig) -> Endpoints {
    let source = &config.source;
    Endpoints {
        bulk_url: source.bulk_url.clone(),
        graphql_url: source.graphql_url.clone(),
        graphql_version: source.graphql_version.clone(),
        bulk_timeout: Duration::from_secs(source.bulk_timeout_secs),
        chapter_timeout: Duration::from_secs(source.chapter_timeout_secs),
    }
}

fn settings(config: &AlkitabConfig) -> IngestSettings {
    IngestSettings {
        mode: config.source.mode,
        table: config.sink.table.clone(),
        batch_size: config.ingest.batch_size,
        dry_run: config.ingest.dry_run,
        pace: Duration::from_millis(config.source.pace_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alkitab_core::SourceMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_override_config() {
        let args = SeedArgs {
            mode: Some(SourceMode::Bulk),
            dry_run: true,
            batch_size: Some(50),
            table: Some("ayat".to_string()),
            bulk_url: Some("http://localhost:9000/tb.json".to_string()),
            graphql_url: None,
            pace_ms: Some(250),
        };
        let config = apply_overrides(AlkitabConfig::default(), &args);

        assert_eq!(config.source.mode, SourceMode::Bulk);
        assert!(config.ingest.dry_run);
        assert_eq!(config.ingest.batch_size, 50);
        assert_eq!(config.sink.table, "ayat");
        assert_eq!(config.source.bulk_url, "http://localhost:9000/tb.json");
        assert_eq!(
            config.source.graphql_url,
            AlkitabConfig::default().source.graphql_url
        );

        let settings = settings(&config);
        assert_eq!(settings.pace, Duration::from_millis(250));
        assert_eq!(settings.table, "ayat");
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = AlkitabConfig::default();
        config.ingest.dry_run = true;
        config.ingest.batch_size = 10;

        let config = apply_overrides(config, &SeedArgs::default());
        assert!(config.ingest.dry_run);
        assert_eq!(config.ingest.batch_size, 10);
    }

    #[test]
    fn real_run_requires_sink_credentials() {
        let config = AlkitabConfig::default();
        assert!(build_sink(&config).is_err());

        let mut dry = AlkitabConfig::default();
        dry.ingest.dry_run = true;
        assert!(build_sink(&dry).is_ok());
    }

    #[test]
    fn endpoints_follow_source_config() {
        let mut config = AlkitabConfig::default();
        config.source.bulk_timeout_secs = 5;
        config.source.graphql_version = "bis".to_string();
        let endpoints = endpoints(&config);
        assert_eq!(endpoints.bulk_timeout, Duration::from_secs(5));
        assert_eq!(endpoints.graphql_version, "bis");
    }
}
