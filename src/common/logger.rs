//! Tracing subscriber setup shared by the server binary and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter defaults to `<bin_name>=<level>,tower_http=<level>` and can be
/// overridden with the `RUST_LOG` environment variable.
pub fn setup_logger(bin_name: &str, level: &str) {
    let default_filter = format!("{}={},varanda={},tower_http={}", bin_name, level, level, level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
