//! cli::setup
//!
//! Logging and panic hook initialization.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RIG_LOG";

/// Build the log filter.
///
/// `$RIG_LOG` wins when set; otherwise `debug` with `--debug`, else `warn`.
pub fn filter(debug: bool) -> EnvFilter {
    let fallback = if debug { "rig=debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize the tracing subscriber, writing to stderr.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_tracing(debug: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if result.is_err() {
        tracing::trace!("tracing subscriber already installed");
    }
}

/// Route panic reports through tracing instead of the default stderr hook.
///
/// Handler panics are recovered and reported in the command outcome, so the
/// raw hook output would only duplicate them. The detail stays visible with
/// `--debug` or `RIG_LOG`.
pub fn quiet_panics() {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(%info, "panic recovered");
    }));
}
