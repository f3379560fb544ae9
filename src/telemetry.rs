//! Call tracing for library operations and the `tracing` subscriber setup.

use chrono::{DateTime, Local};
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Collaborator told about every public [`crate::Library`] operation right
/// before it runs.
pub trait ActionLog {
    fn record(&self, action: &str, at: DateTime<Local>);
}

/// Default action log that forwards to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ActionLog for TracingLog {
    fn record(&self, action: &str, at: DateTime<Local>) {
        tracing::info!(action, at = %at.format("%Y-%m-%d %H:%M:%S%.6f"), "running");
    }
}

/// Install the global fmt subscriber. Logs go to stderr so they never mix
/// with the menu on stdout.
///
/// `RUST_LOG` overrides `level` when set.
pub fn init_tracing(level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
