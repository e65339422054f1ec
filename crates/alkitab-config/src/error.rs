//! Errors raised while loading or checking configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read, or a value has the wrong type.
    #[error("failed to load alkitab config: {0}")]
    Figment(#[from] figment::Error),

    /// A run that writes rows has no destination credential for `field`.
    #[error("sink.{field} is not set; provide it through {env} or run with --dry-run")]
    MissingSinkCredential {
        field: &'static str,
        env: &'static str,
    },

    /// A value was read but no run can work with it.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_the_variables() {
        let err = ConfigError::MissingSinkCredential {
            field: "api_key",
            env: "SUPABASE_SERVICE_ROLE_KEY or ALKITAB_SINK__API_KEY",
        };
        let text = err.to_string();
        assert!(text.starts_with("sink.api_key is not set"));
        assert!(text.contains("SUPABASE_SERVICE_ROLE_KEY"));
        assert!(text.contains("--dry-run"));
    }
}
