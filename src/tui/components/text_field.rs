//! Single-line text input
//!
//! Keeps the cursor as a byte offset on a char boundary and reports its
//! on-screen column by display width, so emoji and CJK input line up.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Display column of the cursor
    pub fn cursor_column(&self) -> u16 {
        self.value[..self.cursor].width() as u16
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.value.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.value.replace_range(self.cursor..next, "");
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    /// Apply an editing key
    ///
    /// Keys that aren't editing keys come back as `Ignored` for the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> EditOutcome {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c);
                EditOutcome::Changed
            }
            KeyCode::Backspace => EditOutcome::from_changed(self.backspace()),
            KeyCode::Delete => EditOutcome::from_changed(self.delete()),
            KeyCode::Left => {
                self.move_left();
                EditOutcome::Moved
            }
            KeyCode::Right => {
                self.move_right();
                EditOutcome::Moved
            }
            KeyCode::Home => {
                self.home();
                EditOutcome::Moved
            }
            KeyCode::End => {
                self.end();
                EditOutcome::Moved
            }
            _ => EditOutcome::Ignored,
        }
    }
}

/// What a key did to a [`TextField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Value changed
    Changed,
    /// Only the cursor moved (or the key was a no-op edit)
    Moved,
    /// Not an editing key
    Ignored,
}

impl EditOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextField {
        let mut field = TextField::default();
        for c in text.chars() {
            field.insert(c);
        }
        field
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn insert_in_the_middle() {
        let mut field = typed("slay");
        field.move_left();
        field.move_left();
        field.insert('-');
        assert_eq!(field.value(), "sl-ay");
    }

    #[test]
    fn backspace_removes_whole_emoji() {
        let mut field = typed("hi💅");
        assert!(field.backspace());
        assert_eq!(field.value(), "hi");
        assert_eq!(field.cursor_column(), 2);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut field = typed("ok");
        assert!(!field.delete());
        field.home();
        assert!(field.delete());
        assert_eq!(field.value(), "k");
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let field = typed("a💅");
        assert_eq!(field.cursor_column(), 3);
    }

    #[test]
    fn control_chords_are_not_typed() {
        let mut field = TextField::default();
        let outcome = field.handle_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL));
        assert_eq!(outcome, EditOutcome::Ignored);
        assert_eq!(field.value(), "");

        assert_eq!(field.handle_key(key(KeyCode::Char('G'))), EditOutcome::Changed);
        assert_eq!(field.value(), "G");
        assert_eq!(field.handle_key(key(KeyCode::Enter)), EditOutcome::Ignored);
    }
}
