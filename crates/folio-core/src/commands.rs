//! Command registry for the portfolio terminal.
//!
//! The registry is a fixed table built at compile time. Names are unique and
//! lookups are case-insensitive; the table never changes at runtime.

use std::fmt::Write;

use chrono::{NaiveTime, Timelike};
use rand::{Rng, RngCore};

use crate::content;

/// What a registered command does when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Greet,
    Fact,
    Workhours,
    Mood,
    ContactInfo,
    Quote,
    About,
    Projects,
    /// Truncates the transcript; applied by the session, not `execute`.
    Clear,
    /// Produces no output and raises a navigate-home signal in the session.
    Exit,
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct Command {
    /// Unique name; the case-insensitive match key.
    pub name: &'static str,
    /// One-line help text.
    pub description: &'static str,
    /// Dispatch kind.
    pub kind: CommandKind,
}

/// Registered commands, in help-listing order.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Show this help message",
        kind: CommandKind::Help,
    },
    Command {
        name: "greet",
        description: "Get a personalized greeting",
        kind: CommandKind::Greet,
    },
    Command {
        name: "fact",
        description: "Get a random fun fact",
        kind: CommandKind::Fact,
    },
    Command {
        name: "workhours",
        description: "View my working hours",
        kind: CommandKind::Workhours,
    },
    Command {
        name: "mood",
        description: "Check my current mood",
        kind: CommandKind::Mood,
    },
    Command {
        name: "contact-info",
        description: "Get my contact information",
        kind: CommandKind::ContactInfo,
    },
    Command {
        name: "quote",
        description: "Get an inspirational quote",
        kind: CommandKind::Quote,
    },
    Command {
        name: "about",
        description: "Learn more about me",
        kind: CommandKind::About,
    },
    Command {
        name: "projects",
        description: "View my projects",
        kind: CommandKind::Projects,
    },
    Command {
        name: "clear",
        description: "Clear the terminal",
        kind: CommandKind::Clear,
    },
    Command {
        name: "exit",
        description: "Return to homepage",
        kind: CommandKind::Exit,
    },
];

/// Looks up a command by name (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static Command> {
    let key = name.to_lowercase();
    COMMANDS.iter().find(|command| command.name == key)
}

/// Returns the names of all commands the partial input is a prefix of.
///
/// Matching is case-insensitive; the returned names keep registry order.
pub fn completions(partial: &str) -> Vec<&'static str> {
    let partial = partial.to_lowercase();
    COMMANDS
        .iter()
        .map(|command| command.name)
        .filter(|name| name.starts_with(&partial))
        .collect()
}

/// Builds the `help` listing from the registry.
pub fn help_text() -> String {
    let mut out = String::from("Available commands:");
    for command in COMMANDS {
        let _ = write!(out, "\n  {:<14}- {}", command.name, command.description);
    }
    out
}

/// Ambient inputs for command execution.
///
/// Clock and random source are injected so dispatch stays deterministic
/// under test.
pub struct ExecContext<'a> {
    pub now: NaiveTime,
    pub rng: &'a mut dyn RngCore,
}

/// Executes a command, producing its output text.
///
/// `Clear` and `Exit` produce no output; their effects are applied by the
/// session.
pub fn execute(kind: CommandKind, ctx: &mut ExecContext<'_>) -> String {
    match kind {
        CommandKind::Help => help_text(),
        CommandKind::Greet => greeting_for(ctx.now).to_string(),
        CommandKind::Fact => pick(ctx.rng, content::FACTS).to_string(),
        CommandKind::Workhours => content::WORKHOURS.to_string(),
        CommandKind::Mood => pick(ctx.rng, content::MOODS).to_string(),
        CommandKind::ContactInfo => content::CONTACT_INFO.to_string(),
        CommandKind::Quote => pick(ctx.rng, content::QUOTES).to_string(),
        CommandKind::About => content::ABOUT.to_string(),
        CommandKind::Projects => content::PROJECTS.to_string(),
        CommandKind::Clear | CommandKind::Exit => String::new(),
    }
}

/// Time-of-day greeting bands: before noon, noon to 17:59, 18:00 onward.
pub fn greeting_for(now: NaiveTime) -> &'static str {
    match now.hour() {
        0..12 => content::GREETING_MORNING,
        12..18 => content::GREETING_AFTERNOON,
        _ => content::GREETING_EVENING,
    }
}

/// Uniform pick from a fixed list.
fn pick(rng: &mut dyn RngCore, items: &'static [&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}
