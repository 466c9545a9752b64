//! Tracing bootstrap.
//!
//! Registry diagnostics are plain `tracing` events; this installs the fmt
//! subscriber that prints them. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. A second call (or a subscriber installed by
/// a test harness) is ignored.
pub fn init() {
    let _ = fmt().with_env_filter(env_filter()).try_init();
}
