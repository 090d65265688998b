//! Terminal session state.
//!
//! Owns the transcript, the command history, and the recall cursor. All
//! mutation goes through the methods here; the presentation layer only reads
//! the transcript and renders deltas. Nothing is persisted: transcript and
//! history live for the session and are dropped with it.

use chrono::NaiveTime;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::commands::{self, CommandKind, ExecContext};
use crate::content;

/// Clock source injected at construction so `greet` stays testable.
pub type ClockFn = fn() -> NaiveTime;

fn local_time() -> NaiveTime {
    chrono::Local::now().time()
}

/// Change a submission applies to the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptDelta {
    /// Blank input; nothing changed.
    None,
    /// Lines appended to the transcript.
    Append(Vec<String>),
    /// Transcript truncated (`clear`).
    Clear,
}

/// Out-of-band signal raised by a submission.
///
/// The session never navigates itself; the caller owns the mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// `exit` was invoked; return to the homepage.
    NavigateHome,
}

/// Result of [`Session::submit`].
#[derive(Debug)]
pub struct SubmitOutcome {
    pub delta: TranscriptDelta,
    pub signal: Option<SessionSignal>,
}

/// Result of an autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No command starts with the partial input.
    NoMatch,
    /// Exactly one match; replace the input with this name.
    Replace(&'static str),
    /// Two or more matches; a listing was appended to the transcript.
    Listed(Vec<&'static str>),
}

/// One terminal session: transcript, history, and recall cursor.
pub struct Session {
    /// Display lines, oldest first.
    transcript: Vec<String>,

    /// Raw submitted inputs, oldest first. Never truncated.
    history: Vec<String>,

    /// Recall position in history (None = not navigating).
    history_index: Option<usize>,

    clock: ClockFn,
    rng: SmallRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the ambient clock and an OS-seeded rng.
    pub fn new() -> Self {
        Self::with_parts(local_time, SmallRng::from_os_rng())
    }

    /// Creates a session from explicit parts.
    ///
    /// Tests pass a fixed clock and a seeded rng to make submissions
    /// deterministic.
    pub fn with_parts(clock: ClockFn, rng: SmallRng) -> Self {
        Self {
            transcript: content::WELCOME.iter().map(|line| (*line).to_string()).collect(),
            history: Vec::new(),
            history_index: None,
            clock,
            rng,
        }
    }

    /// The full transcript, oldest line first.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Raw inputs submitted so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Submits one line of raw input.
    ///
    /// Blank input is a no-op. Everything else lands in history (unknown
    /// commands included) and resets the recall cursor. `clear` truncates
    /// the transcript instead of appending; `exit` appends only its echo
    /// and raises [`SessionSignal::NavigateHome`]. Unrecognized input gets
    /// a not-found line, not an error.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SubmitOutcome {
                delta: TranscriptDelta::None,
                signal: None,
            };
        }
        let key = trimmed.to_lowercase();

        self.history.push(raw.to_string());
        self.history_index = None;

        if key == "clear" {
            self.transcript.clear();
            return SubmitOutcome {
                delta: TranscriptDelta::Clear,
                signal: None,
            };
        }

        let mut lines = vec![format!("> {raw}")];
        let mut signal = None;

        match commands::lookup(&key) {
            Some(command) => {
                tracing::debug!(command = command.name, "dispatching");
                if command.kind == CommandKind::Exit {
                    signal = Some(SessionSignal::NavigateHome);
                }
                let mut ctx = ExecContext {
                    now: (self.clock)(),
                    rng: &mut self.rng,
                };
                let output = commands::execute(command.kind, &mut ctx);
                if !output.is_empty() {
                    lines.push(output);
                    lines.push(String::new());
                }
            }
            None => {
                tracing::debug!(input = key, "unknown command");
                lines.push(format!(
                    "Command not found: \"{raw}\". Type \"help\" to see available commands."
                ));
                lines.push(String::new());
            }
        }

        self.transcript.extend(lines.iter().cloned());
        SubmitOutcome {
            delta: TranscriptDelta::Append(lines),
            signal,
        }
    }

    /// Steps backward through history, returning the recalled entry.
    ///
    /// Starts at the newest entry when not navigating; clamps at the oldest
    /// (no wraparound). Returns `None` only when history is empty.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_index = Some(index);
        self.history.get(index).cloned()
    }

    /// Steps forward through history.
    ///
    /// Returns `None` when not navigating (no-op). Stepping past the newest
    /// entry unsets the cursor and returns the empty-input sentinel so the
    /// caller restores a blank input line.
    pub fn recall_next(&mut self) -> Option<String> {
        let index = self.history_index?;
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.history.get(index + 1).cloned()
        } else {
            self.history_index = None;
            Some(String::new())
        }
    }

    /// Prefix autocomplete over registered command names.
    ///
    /// A unique match replaces the input. Multiple matches append an echoed
    /// listing to the transcript without creating a history entry.
    pub fn complete(&mut self, partial: &str) -> Completion {
        let matches = commands::completions(partial);
        match matches.as_slice() {
            [] => Completion::NoMatch,
            [only] => Completion::Replace(only),
            _ => {
                self.transcript.push(format!("> {partial}"));
                self.transcript
                    .push(format!("Possible completions: {}", matches.join(", ")));
                self.transcript.push(String::new());
                Completion::Listed(matches)
            }
        }
    }
}
