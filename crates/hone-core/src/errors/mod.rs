//! Error handling for hone.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod apply_error;
pub mod config_error;
pub mod pipeline_error;

pub use apply_error::ApplyError;
pub use config_error::ConfigError;
pub use pipeline_error::PipelineError;
