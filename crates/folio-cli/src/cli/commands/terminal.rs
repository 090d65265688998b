//! Terminal command handler.

use anyhow::{Context, Result};
use folio_core::config::Config;
use folio_core::logging;
use folio_tui::SessionEnd;

pub fn run(config: &Config) -> Result<()> {
    let _log_guard = logging::init(config).context("init logging")?;
    tracing::info!("starting terminal session");

    let end = folio_tui::run_terminal().context("terminal session failed")?;

    // The session only signals intent; navigation happens here, after the
    // terminal is restored.
    match end {
        SessionEnd::Quit => {
            println!("Goodbye!");
        }
        SessionEnd::NavigateHome => match config.home_url.as_deref() {
            Some(url) => {
                tracing::info!(url, "returning to homepage");
                println!("Returning to homepage...");
                open::that(url).with_context(|| format!("open {url}"))?;
            }
            None => {
                tracing::info!("exit requested but no home_url configured");
                println!("Goodbye!");
            }
        },
    }

    Ok(())
}
