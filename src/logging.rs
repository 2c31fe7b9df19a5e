//! Logging setup

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "bball_weekly=debug,warn"
    } else {
        "bball_weekly=info,warn"
    }
}

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr so JSON on stdout stays machine-readable.
pub fn init(verbose: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
