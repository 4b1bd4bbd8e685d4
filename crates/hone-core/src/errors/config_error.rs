//! Configuration errors.

/// Errors raised while loading or validating configuration.
///
/// Pattern-level issues (unknown ids, out-of-range priorities) are
/// deliberately NOT errors: the catalog applies those leniently and logs
/// a warning so a malformed config cannot crash a long-running session.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Pattern dependency cycle: {chain}")]
    DependencyCycle { chain: String },
}
