//! Tracing subscriber setup for the `hyperpi` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `HYPERPI_LOG=debug`.
pub const LOG_ENV: &str = "HYPERPI_LOG";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize a compact stderr subscriber. Defaults to `info`, or `debug`
/// when `verbose` is set and `HYPERPI_LOG` is absent.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(filter_or(default))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
