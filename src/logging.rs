// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. Falls back to `info` when `RUST_LOG`
/// is unset; a second call is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
