use alkitab_core::{CanonicalBook, Catalog};
use anyhow::Context;

use crate::cli::{BooksArgs, GlobalFlags};
use crate::output::output;

/// Handle `alkitab-seed books`.
pub fn handle(args: &BooksArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let books = select(&Catalog::standard(), &args.ids)?;
    output(&books, flags.format)
}

/// The whole catalog, or the books with the given ids in the order asked.
fn select(catalog: &Catalog, ids: &[u16]) -> anyhow::Result<Vec<&'static CanonicalBook>> {
    if ids.is_empty() {
        return Ok(catalog.iter().collect());
    }
    ids.iter()
        .map(|id| {
            catalog
                .get(*id)
                .with_context(|| format!("no canonical book has id {id}"))
        })
        .collect()
}
