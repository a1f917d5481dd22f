//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with the interactive prompts on
//! stdout. The filter is read from `BUDGET_TRACKER_LOG` (e.g. `debug`,
//! `budget_tracker=trace`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "BUDGET_TRACKER_LOG";

/// Install the global tracing subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
