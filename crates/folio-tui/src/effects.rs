//! UI effect types.
//!
//! Effects are commands returned by the reducer for the runtime to execute.
//! This keeps the reducer pure: it mutates state and returns effects, and
//! quitting or leaving the session stays in the runtime.

/// Effects returned by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Quit and hand the navigate-home intent back to the caller.
    NavigateHome,
}
