use std::path::Path;

use alkitab_config::AlkitabConfig;
use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AlkitabConfig> {
    load_dotenv()?;

    let extra = flags.config.as_deref().map(Path::new);
    if let Some(path) = extra.filter(|path| !path.exists()) {
        anyhow::bail!("config file not found: {}", path.display());
    }

    AlkitabConfig::load_from(extra).context("failed to load configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            config: Some("does-not-exist/alkitab-ci.toml".to_string()),
        };
        let err = load_config(&flags).unwrap_err();
        assert!(err.to_string().contains("alkitab-ci.toml"));
    }
}
