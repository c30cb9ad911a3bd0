//! Tracing subscriber setup for driver processes.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber, seeded from the configured
/// level (`RUST_LOG` still wins when set). Safe to call once per process;
/// later calls are ignored.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
