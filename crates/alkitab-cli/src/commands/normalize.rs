use alkitab_core::{Catalog, Normalizer};
use serde::Serialize;

use crate::cli::{GlobalFlags, NormalizeArgs};
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
struct Resolution<'a> {
    raw: &'a str,
    normalized: String,
    id: Option<u16>,
}

/// Handle `alkitab-seed normalize`.
pub fn handle(args: &NormalizeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = resolve_all(&Catalog::standard(), &Normalizer::standard(), &args.names);
    output(&rows, flags.format)
}

fn resolve_all<'a>(
    catalog: &Catalog,
    normalizer: &Normalizer,
    names: &'a [String],
) -> Vec<Resolution<'a>> {
    names
        .iter()
        .map(|raw| {
            let normalized = normalizer.normalize(raw);
            Resolution {
                raw,
                id: catalog.resolve(normalized.as_str()),
                normalized: normalized.into_string(),
            }
        })
        .collect()
}
