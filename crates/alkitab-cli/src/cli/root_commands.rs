use alkitab_core::SourceMode;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch the corpus and insert it into the destination table.
    Seed(SeedArgs),
    /// Print the canonical book catalog.
    Books(BooksArgs),
    /// Show how book names normalize and resolve.
    Normalize(NormalizeArgs),
}

/// Arguments for `alkitab-seed seed`. Each flag overrides its config value.
#[derive(Clone, Debug, Default, Args)]
pub struct SeedArgs {
    /// Source mode: auto, bulk (bulk-only, json), paginated (paginated-only, graphql)
    #[arg(long)]
    pub mode: Option<SourceMode>,
    /// Parse and count without writing to the sink.
    #[arg(long)]
    pub dry_run: bool,
    /// Records per insert batch.
    #[arg(long)]
    pub batch_size: Option<usize>,
    /// Destination table.
    #[arg(long)]
    pub table: Option<String>,
    /// Bulk JSON document URL.
    #[arg(long)]
    pub bulk_url: Option<String>,
    /// GraphQL endpoint URL.
    #[arg(long)]
    pub graphql_url: Option<String>,
    /// Delay in milliseconds after each paginated chapter.
    #[arg(long)]
    pub pace_ms: Option<u64>,
}

/// Arguments for `alkitab-seed books`.
#[derive(Clone, Debug, Args)]
pub struct BooksArgs {
    /// Only print the books with these ids.
    pub ids: Vec<u16>,
}

/// Arguments for `alkitab-seed normalize`.
#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// Raw book names as they appear in a source.
    #[arg(required = true)]
    pub names: Vec<String>,
}
