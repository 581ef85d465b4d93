//! Logging init helper for embedding applications.
//!
//! Resolution misses are logged at debug/trace through `tracing`; with no
//! subscriber installed those events go nowhere and resolution behaves the
//! same. This helper is for hosts that want the diagnostics on stderr
//! without wiring their own subscriber.

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber with an env-filter
/// (`RUST_LOG`, default `info,template_resources=debug`).
///
/// Idempotent: if a global subscriber is already set, this is a no-op.
pub fn init_stderr_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,template_resources=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
