//! Tracing bootstrap for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Filter resolution: `HONE_LOG` env var if set, otherwise the given
/// default, otherwise "warn". Safe to call more than once — subsequent
/// calls are no-ops.
pub fn init(default_filter: Option<&str>) {
    let filter = EnvFilter::try_from_env("HONE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter.unwrap_or("warn")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
