//! Batching and dry-run settings.

use serde::{Deserialize, Serialize};

const fn default_batch_size() -> usize {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Rows per insert request.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Count batches without sending them.
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = IngestConfig::default();
        assert_eq!(config.batch_size, 1000);
        assert!(!config.dry_run);
    }
}
