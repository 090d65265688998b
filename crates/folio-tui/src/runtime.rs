//! TUI runtime - owns the terminal and runs the event loop.
//!
//! The reducer stays pure and produces effects; this module executes them.
//! Everything is synchronous: one input event is handled to completion
//! before the next is read.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::state::{AppState, SessionEnd};
use crate::{render, terminal, update};

/// Poll timeout while idle. There are no animations or background tasks, so
/// a long timeout keeps CPU usage down without hurting input latency.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
}

impl TuiRuntime {
    /// Creates a runtime and takes over the terminal.
    pub fn new(state: AppState) -> Result<Self> {
        // Set up the panic hook BEFORE entering the alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        Ok(Self { terminal, state })
    }

    /// Runs the event loop until the session ends.
    pub fn run(&mut self) -> Result<SessionEnd> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            if dirty {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }

            if event::poll(IDLE_POLL).context("Failed to poll terminal events")? {
                let event = event::read().context("Failed to read terminal event")?;
                let effects = update::update(&mut self.state, &event);
                dirty = true;
                for effect in effects {
                    self.execute_effect(effect);
                }
            }
        }

        Ok(self.state.end)
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => self.state.should_quit = true,
            UiEffect::NavigateHome => {
                self.state.end = SessionEnd::NavigateHome;
                self.state.should_quit = true;
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
