//! Environment names used by the earlier seed script.
//!
//! These sit below the `ALKITAB_*` variables and above every file, so an
//! existing `.env` keeps working unchanged.

use figment::Figment;
use figment::providers::{Env, Serialized};

/// Variables copied verbatim into a config path, lowest priority first.
/// `SUPABASE_SERVICE_ROLE_KEY` comes after `SUPABASE_KEY` so it wins.
const RENAMED_VARS: [(&str, &str); 8] = [
    ("SUPABASE_URL", "sink.url"),
    ("SUPABASE_KEY", "sink.api_key"),
    ("SUPABASE_SERVICE_ROLE_KEY", "sink.api_key"),
    ("BIBLE_SOURCE_MODE", "source.mode"),
    ("BIBLE_JSON_URL", "source.bulk_url"),
    ("BIBLE_GRAPHQL_URL", "source.graphql_url"),
    ("BIBLE_VERSES_TABLE", "sink.table"),
    ("BIBLE_BATCH_SIZE", "ingest.batch_size"),
];

/// Merge the legacy variables into `figment`.
///
/// `DRY_RUN` is a flag (`1`, `true`, `yes`, `on`); any other value turns dry
/// runs off. `BIBLE_SLEEP_SECONDS` is fractional seconds and lands in
/// `source.pace_ms`; a value that is not a non-negative number is passed
/// through as text so extraction reports it against that field.
pub fn merge(mut figment: Figment) -> Figment {
    for (var, key) in RENAMED_VARS {
        figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
    }

    if let Ok(value) = std::env::var("DRY_RUN") {
        figment = figment.merge(Serialized::default("ingest.dry_run", is_truthy(&value)));
    }

    if let Ok(value) = std::env::var("BIBLE_SLEEP_SECONDS") {
        figment = match seconds_to_millis(&value) {
            Some(millis) => figment.merge(Serialized::default("source.pace_ms", millis)),
            None => figment.merge(Serialized::default("source.pace_ms", value)),
        };
    }

    figment
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seconds_to_millis(value: &str) -> Option<u64> {
    let seconds = value.trim().parse::<f64>().ok()?;
    (seconds.is_finite() && (0.0..=1e9).contains(&seconds))
        .then(|| (seconds * 1000.0).round() as u64)
}
