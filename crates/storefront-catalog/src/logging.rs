//! Logging setup for catalog binaries.
//!
//! Logs go to stderr so the JSON report on stdout stays machine-readable.
//! `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=storefront_core=debug unit-price catalog.json`.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// Calling it twice is harmless: the second call leaves the first
/// subscriber in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
