use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stderr, filtered by `RUST_LOG`.
///
/// - Falls back to `default_level` when `RUST_LOG` is unset or invalid
/// - Human readable output when stderr is a terminal
/// - JSON with flattened event fields otherwise
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    // try_init: a second call (tests) must not panic.
    if io::stderr().is_terminal() {
        let _ = builder.compact().try_init();
    } else {
        let _ = builder.json().flatten_event(true).try_init();
    }
}
