//! Telemetry utilities: tracing initialization and span constructors.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
}

/// Standardized span constructors for dispatch observability.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for a single command dispatch.
    ///
    /// `source` is `"console"` for operator input, or the invoking account
    /// name for connection-scoped dispatch.
    pub fn command(name: &str, source: &str) -> Span {
        info_span!("command", name = %name, source = %source)
    }
}
