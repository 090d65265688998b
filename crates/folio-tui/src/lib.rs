//! Full-screen terminal UI for Folio.

pub mod effects;
pub mod input;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use folio_core::session::Session;
pub use runtime::TuiRuntime;
pub use state::SessionEnd;

use crate::state::AppState;

/// Runs an interactive terminal session until the user quits or exits.
///
/// Returns how the session ended so the caller can act on the navigate-home
/// intent raised by the `exit` command; the UI never navigates itself.
pub fn run_terminal() -> Result<SessionEnd> {
    // The UI renders to stdout and needs a real terminal behind it.
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The terminal UI requires a terminal.\n\
             Use `folio exec --line '...'` for non-interactive use."
        );
    }

    let mut runtime = TuiRuntime::new(AppState::new(Session::new()))?;
    runtime.run()
}
