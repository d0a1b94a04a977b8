//! Tracing subscriber setup.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Picks the filter: `--verbose` wins, then `RUST_LOG`, then the configured level.
pub fn build_filter(config_level: &str, verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(config_level: &str, verbose: bool) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "Logging initialized");
    }
}
