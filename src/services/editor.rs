//! Editor service trait and text insertion utilities.
//!
//! This module provides the editing surface a chosen callout is inserted
//! into, allowing insertion and cursor placement to be tested independently
//! of any UI.

/// Cursor position as (line, column), both 0-indexed. Columns count chars.
pub type Cursor = (usize, usize);

/// Trait for the text surface a callout is inserted into.
pub trait Editor {
    /// Get the current content as lines.
    fn content(&self) -> &[String];

    /// Get the current cursor position (line, column).
    fn cursor_position(&self) -> Cursor;

    /// Set the cursor position.
    fn set_cursor(&mut self, line: usize, column: usize);

    /// Insert `text` at `at` without moving the cursor.
    fn replace_range(&mut self, text: &str, at: Cursor);

    /// Insert `text` at the cursor, then move the cursor past it.
    ///
    /// Returns the new cursor position.
    fn insert_at_cursor(&mut self, text: &str) -> Cursor {
        let cursor = self.cursor_position();
        self.replace_range(text, cursor);
        let (line, column) = cursor_after_insert(cursor, text);
        self.set_cursor(line, column);
        (line, column)
    }

    /// Check if there is any non-whitespace content.
    fn has_content(&self) -> bool {
        self.content().iter().any(|line| !line.trim().is_empty())
    }

    /// Get the total number of lines.
    fn line_count(&self) -> usize {
        self.content().len()
    }
}

/// Cursor position after inserting `text` at `cursor`.
///
/// The line advances by the number of newlines in `text`. The column is the
/// length of the text after the last newline, or the length of the whole
/// text when it has none.
pub fn cursor_after_insert(cursor: Cursor, text: &str) -> Cursor {
    let newlines = text.matches('\n').count();
    let tail = text.rsplit('\n').next().unwrap_or(text);
    (cursor.0 + newlines, tail.chars().count())
}

/// In-memory line buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: (0, 0),
        }
    }
}

impl LineBuffer {
    /// Create a buffer holding `text`, cursor at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(String::from).collect(),
            cursor: (0, 0),
        }
    }

    /// Buffer contents joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Clamp a position into the buffer.
    fn clamp(&self, (line, column): Cursor) -> Cursor {
        let line = line.min(self.lines.len().saturating_sub(1));
        let len = self.lines.get(line).map_or(0, |l| l.chars().count());
        (line, column.min(len))
    }
}

impl Editor for LineBuffer {
    fn content(&self) -> &[String] {
        &self.lines
    }

    fn cursor_position(&self) -> Cursor {
        self.cursor
    }

    fn set_cursor(&mut self, line: usize, column: usize) {
        self.cursor = self.clamp((line, column));
    }

    fn replace_range(&mut self, text: &str, at: Cursor) {
        let (line, column) = self.clamp(at);
        let current = &self.lines[line];
        let split = current
            .char_indices()
            .nth(column)
            .map_or(current.len(), |(idx, _)| idx);
        let (head, rest) = current.split_at(split);
        let combined = format!("{head}{text}{rest}");

        let new_lines: Vec<String> = combined.split('\n').map(String::from).collect();
        self.lines.splice(line..=line, new_lines);
    }
}
