//! Logging setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber, writing to stderr.
///
/// `directive` is an `EnvFilter` string such as `info` or `markgate=debug`.
/// An invalid directive falls back to `warn`.
pub fn init_logging(directive: &str) {
    let env_filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log level '{}': {}; using 'warn'", directive, e);
        EnvFilter::new("warn")
    });

    let result = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("failed to set global logger: {}", e);
    }
}
