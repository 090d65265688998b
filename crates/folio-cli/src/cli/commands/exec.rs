//! Exec command handler: one-shot submission without the TUI.

use anyhow::{Context, Result};
use folio_core::config::Config;
use folio_core::logging;
use folio_core::session::{Session, TranscriptDelta};

pub fn run(config: &Config, line: &str) -> Result<()> {
    let _log_guard = logging::init(config).context("init logging")?;

    let mut session = Session::new();
    let outcome = session.submit(line);
    tracing::debug!(line, "submitted");

    if let TranscriptDelta::Append(lines) = outcome.delta {
        for line in lines {
            println!("{line}");
        }
    }

    // One-shot mode has nowhere to navigate; the exit signal is ignored.
    Ok(())
}
