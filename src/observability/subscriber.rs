//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Level used when the directive does not parse.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a fmt subscriber writing to stderr, filtered by `directive`
/// (e.g. `debug` or `director=trace`).
///
/// Returns false when a global subscriber is already installed; calling it
/// twice is harmless.
pub fn init_tracing(directive: &str) -> bool {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
