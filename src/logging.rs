//! Structured logging setup
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job.

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber. `RUST_LOG` overrides `level`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = subscriber.try_init();
}
