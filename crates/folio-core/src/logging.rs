//! Logging setup.
//!
//! The TUI owns the terminal while it runs, so logs go to a file under
//! ${FOLIO_HOME}/logs instead of stdout.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Initializes the global tracing subscriber with a file writer.
///
/// Filter precedence: RUST_LOG, then `log_filter` from config, then "info".
/// Returns the appender guard; dropping it stops the writer thread, so the
/// caller keeps it alive for the process lifetime.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_deref().unwrap_or("info")));

    let file_appender = tracing_appender::rolling::never(&logs_dir, "folio.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
