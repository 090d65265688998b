//! Uncommitted input line state.
//!
//! A single-line buffer with a character cursor. History recall and
//! autocomplete live in the session; this is only the text being edited.

/// Single-line input buffer with a character cursor.
#[derive(Debug, Default)]
pub struct InputState {
    buffer: String,
    /// Cursor position in characters (0..=char count).
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current input text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of the cursor into the buffer.
    pub fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index();
        self.buffer.insert(at, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.buffer.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            let at = self.byte_index();
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    pub fn move_head(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Kills from the cursor to the beginning of the line (Ctrl+U).
    pub fn kill_to_head(&mut self) {
        let at = self.byte_index();
        self.buffer.drain(..at);
        self.cursor = 0;
    }

    /// Kills from the cursor to the end of the line (Ctrl+K).
    pub fn kill_to_end(&mut self) {
        let at = self.byte_index();
        self.buffer.truncate(at);
    }

    /// Replaces the buffer, cursor at the end (history recall, autocomplete).
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.chars().count();
    }

    /// Takes the buffer for submission, leaving it empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_take() {
        let mut input = InputState::new();
        for ch in "help".chars() {
            input.insert_char(ch);
        }
        assert_eq!(input.text(), "help");
        assert_eq!(input.cursor(), 4);
        assert_eq!(input.take(), "help");
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut input = InputState::new();
        input.set_text("hlp");
        input.move_head();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.text(), "help");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = InputState::new();
        input.set_text("fact");
        input.backspace();
        assert_eq!(input.text(), "fac");
        input.move_head();
        input.delete();
        assert_eq!(input.text(), "ac");
        // Backspace at the head is a no-op.
        input.backspace();
        assert_eq!(input.text(), "ac");
    }

    #[test]
    fn test_cursor_handles_multibyte_chars() {
        let mut input = InputState::new();
        input.insert_char('☀');
        input.insert_char('️');
        input.insert_char('x');
        assert_eq!(input.cursor(), 3);
        input.backspace();
        input.backspace();
        assert_eq!(input.text(), "☀");
        input.insert_char('y');
        assert_eq!(input.text(), "☀y");
    }

    #[test]
    fn test_kill_to_head_and_end() {
        let mut input = InputState::new();
        input.set_text("workhours");
        input.move_head();
        for _ in 0..4 {
            input.move_right();
        }
        input.kill_to_end();
        assert_eq!(input.text(), "work");
        input.kill_to_head();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_movement_clamps_at_bounds() {
        let mut input = InputState::new();
        input.set_text("ok");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_head();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }
}
