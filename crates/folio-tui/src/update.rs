//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects; rendering never mutates anything.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::session::{Completion, SessionSignal, TranscriptDelta};

use crate::effects::UiEffect;
use crate::state::AppState;

/// Display lines scrolled per PageUp/PageDown press.
const PAGE_SCROLL_LINES: usize = 10;

/// The main reducer function.
pub fn update(state: &mut AppState, event: &Event) -> Vec<UiEffect> {
    match event {
        // Resize just triggers the runtime's redraw; key releases are noise.
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, *key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Ctrl+C always quits; Ctrl+D only on an empty line (shell habit).
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Char('d') if ctrl && state.input.text().is_empty() => {
            return vec![UiEffect::Quit];
        }

        // readline-style line editing
        KeyCode::Char('a') if ctrl => state.input.move_head(),
        KeyCode::Char('e') if ctrl => state.input.move_end(),
        KeyCode::Char('u') if ctrl => state.input.kill_to_head(),
        KeyCode::Char('k') if ctrl => state.input.kill_to_end(),

        KeyCode::Enter => return submit(state),

        // History recall replaces the whole input line.
        KeyCode::Up => {
            if let Some(entry) = state.session.recall_previous() {
                state.input.set_text(&entry);
            }
        }
        KeyCode::Down => {
            if let Some(entry) = state.session.recall_next() {
                state.input.set_text(&entry);
            }
        }

        KeyCode::Tab => complete(state),

        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Delete => state.input.delete(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_head(),
        KeyCode::End => state.input.move_end(),

        KeyCode::PageUp => {
            let max = state.transcript_line_count().saturating_sub(1);
            state.scroll_from_bottom = (state.scroll_from_bottom + PAGE_SCROLL_LINES).min(max);
        }
        KeyCode::PageDown => {
            state.scroll_from_bottom = state.scroll_from_bottom.saturating_sub(PAGE_SCROLL_LINES);
        }

        KeyCode::Char(ch) if !ctrl => state.input.insert_char(ch),
        _ => {}
    }

    vec![]
}

/// Submits the current input line through the session.
fn submit(state: &mut AppState) -> Vec<UiEffect> {
    let raw = state.input.take();
    let outcome = state.session.submit(&raw);

    // New output snaps the view back to the bottom.
    if !matches!(outcome.delta, TranscriptDelta::None) {
        state.scroll_from_bottom = 0;
    }

    match outcome.signal {
        Some(SessionSignal::NavigateHome) => vec![UiEffect::NavigateHome],
        None => vec![],
    }
}

/// Requests autocomplete for the current input.
fn complete(state: &mut AppState) {
    match state.session.complete(state.input.text()) {
        Completion::Replace(name) => state.input.set_text(name),
        // The listing landed in the transcript; make sure it is visible.
        Completion::Listed(_) => state.scroll_from_bottom = 0,
        Completion::NoMatch => {}
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use folio_core::session::Session;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn nine_am() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    fn state() -> AppState {
        AppState::new(Session::with_parts(nine_am, SmallRng::seed_from_u64(3)))
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(state, &Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn press_ctrl(state: &mut AppState, ch: char) -> Vec<UiEffect> {
        update(
            state,
            &Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)),
        )
    }

    fn type_line(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(state, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_typing_and_enter_submits() {
        let mut state = state();
        let before = state.session.transcript().len();
        type_line(&mut state, "workhours");
        assert_eq!(state.input.text(), "workhours");

        let effects = press(&mut state, KeyCode::Enter);
        assert!(effects.is_empty());
        assert_eq!(state.input.text(), "");
        assert_eq!(state.session.transcript().len(), before + 3);
        assert_eq!(state.session.history(), &["workhours".to_string()]);
    }

    #[test]
    fn test_up_recalls_previous_entry_into_input() {
        let mut state = state();
        type_line(&mut state, "help");
        press(&mut state, KeyCode::Enter);
        type_line(&mut state, "fact");
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::Up);
        assert_eq!(state.input.text(), "fact");
        press(&mut state, KeyCode::Up);
        assert_eq!(state.input.text(), "help");
        press(&mut state, KeyCode::Down);
        assert_eq!(state.input.text(), "fact");
        // Past the newest entry the input goes blank again.
        press(&mut state, KeyCode::Down);
        assert_eq!(state.input.text(), "");
    }

    #[test]
    fn test_up_with_empty_history_leaves_input_alone() {
        let mut state = state();
        type_line(&mut state, "dra");
        press(&mut state, KeyCode::Up);
        assert_eq!(state.input.text(), "dra");
    }

    #[test]
    fn test_tab_completes_unique_prefix() {
        let mut state = state();
        type_line(&mut state, "he");
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.input.text(), "help");
    }

    #[test]
    fn test_tab_with_multiple_matches_lists_them() {
        let mut state = state();
        let before = state.session.transcript().len();
        type_line(&mut state, "c");
        press(&mut state, KeyCode::Tab);
        // Input unchanged; listing appended to the transcript.
        assert_eq!(state.input.text(), "c");
        assert_eq!(state.session.transcript().len(), before + 3);
    }

    #[test]
    fn test_exit_command_raises_navigate_home() {
        let mut state = state();
        type_line(&mut state, "exit");
        let effects = press(&mut state, KeyCode::Enter);
        assert_eq!(effects, vec![UiEffect::NavigateHome]);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = state();
        type_line(&mut state, "half-typed");
        assert_eq!(press_ctrl(&mut state, 'c'), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_ctrl_d_quits_only_on_empty_line() {
        let mut state = state();
        type_line(&mut state, "x");
        assert!(press_ctrl(&mut state, 'd').is_empty());
        press(&mut state, KeyCode::Backspace);
        assert_eq!(press_ctrl(&mut state, 'd'), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_page_scroll_clamps_and_submit_snaps_to_bottom() {
        let mut state = state();
        type_line(&mut state, "help");
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::PageUp);
        assert!(state.scroll_from_bottom > 0);
        assert!(state.scroll_from_bottom < state.transcript_line_count());

        type_line(&mut state, "fact");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.scroll_from_bottom, 0);
    }
}
