use tracing_subscriber::{fmt, EnvFilter};

/// Install the diagnostic logger
///
/// Diagnostics go to stderr so they never interleave with the menu on
/// stdout. `RUST_LOG` wins over `default_level` when it is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<(), String> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}
