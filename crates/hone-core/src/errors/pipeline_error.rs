//! Pipeline-level errors surfaced at the orchestrator boundary.

use super::{ApplyError, ConfigError};

/// Errors that can escape the orchestrator.
///
/// Rule failures are fault-isolated into per-call diagnostics and never
/// reach this enum; what remains is configuration problems and
/// caller-contract violations, which indicate a programming error
/// upstream and are not recovered.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Apply error: {0}")]
    Apply(#[from] ApplyError),

    #[error("Invalid context: {0}")]
    InvalidContext(String),
}
