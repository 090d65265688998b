//! Pure view/render functions for the terminal UI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;

/// Prompt shown in front of the input line; matches the transcript echo.
const PROMPT: &str = "> ";

/// Height of the window-controls title bar.
const TITLE_HEIGHT: u16 = 1;

/// Height of the input line.
const INPUT_HEIGHT: u16 = 1;

/// Renders the entire UI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let [title_area, transcript_area, input_area] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(INPUT_HEIGHT),
    ])
    .areas(frame.area());

    render_title_bar(frame, title_area);
    render_transcript(state, frame, transcript_area);
    render_input(state, frame, input_area);
}

/// Window-control dots and the page path, echoing the site's terminal chrome.
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" ●", Style::default().fg(Color::Red)),
        Span::styled(" ●", Style::default().fg(Color::Yellow)),
        Span::styled(" ●", Style::default().fg(Color::Green)),
        Span::styled("  /terminal", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Transcript pane: bottom-following, bottom-aligned slice of the flattened
/// display lines.
fn render_transcript(state: &AppState, frame: &mut Frame, area: Rect) {
    let height = area.height as usize;

    let mut lines: Vec<Line<'_>> = Vec::new();
    for entry in state.session.transcript() {
        for part in entry.split('\n') {
            lines.push(style_transcript_line(part));
        }
    }

    let total = lines.len();
    let max_scroll = total.saturating_sub(height);
    let scroll = state.scroll_from_bottom.min(max_scroll);
    let end = total - scroll;
    let start = end.saturating_sub(height);

    let content: Vec<Line<'_>> = lines.into_iter().skip(start).take(end - start).collect();

    // Bottom-align: pad at the top when content doesn't fill the pane.
    let visible: Vec<Line<'_>> = if content.len() < height {
        let mut padded = vec![Line::default(); height - content.len()];
        padded.extend(content);
        padded
    } else {
        content
    };

    frame.render_widget(Paragraph::new(visible), area);
}

/// Echo lines keep the prompt color so the transcript reads like a shell log.
fn style_transcript_line(text: &str) -> Line<'_> {
    if let Some(rest) = text.strip_prefix(PROMPT) {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Color::Green)),
            Span::raw(rest),
        ])
    } else {
        Line::from(text)
    }
}

/// Input line with a hardware cursor at the edit position.
fn render_input(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Color::Green)),
        Span::raw(state.input.text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let before_cursor = &state.input.text()[..state.input.byte_index()];
    let x = area.x
        + (PROMPT.width() + before_cursor.width()).min(area.width.saturating_sub(1) as usize)
            as u16;
    frame.set_cursor_position(Position::new(x, area.y));
}
