//! Application state for the terminal UI.
//!
//! The session (transcript, history, dispatch) lives in folio-core; this
//! module only adds the presentation state around it: the uncommitted input
//! line, the scroll position, and the quit/exit flags.

use folio_core::session::Session;

use crate::input::InputState;

/// How the session ended; returned to the caller of the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionEnd {
    /// Plain quit (Ctrl+C, Ctrl+D).
    #[default]
    Quit,

    /// `exit` ran; the caller should return the visitor to the homepage.
    NavigateHome,
}

/// Terminal UI state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,

    /// How the session ended (meaningful once `should_quit` is set).
    pub end: SessionEnd,

    /// The command session.
    pub session: Session,

    /// Uncommitted input line.
    pub input: InputState,

    /// Transcript scroll offset in display lines, measured from the bottom.
    /// 0 means following new output.
    pub scroll_from_bottom: usize,
}

impl AppState {
    /// Creates UI state around an existing session.
    pub fn new(session: Session) -> Self {
        Self {
            should_quit: false,
            end: SessionEnd::default(),
            session,
            input: InputState::new(),
            scroll_from_bottom: 0,
        }
    }

    /// Total display lines in the transcript.
    ///
    /// Transcript entries may span several lines; scroll clamping works on
    /// the flattened count.
    pub fn transcript_line_count(&self) -> usize {
        self.session
            .transcript()
            .iter()
            .map(|entry| entry.split('\n').count())
            .sum()
    }
}
