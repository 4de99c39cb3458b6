//! Diagnostic logging to stderr.
//!
//! Reports go to stdout; tracing output stays on stderr so it never mixes
//! with them.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `XCSTRINGS_LOG=debug`.
pub const LOG_ENV: &str = "XCSTRINGS_LOG";

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when running inside tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
