//! Rule execution errors.

/// Errors raised by a single rewrite rule invocation.
///
/// These never abort the pipeline: the applicator records the failure as
/// a diagnostic and continues with the next rule.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("Rule failed: {0}")]
    Failed(String),

    #[error("Rule produced invalid output: {0}")]
    InvalidOutput(String),

    #[error("Rule {id} panicked: {message}")]
    Panicked { id: String, message: String },
}
