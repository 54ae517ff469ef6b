//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so `$` and other symbols can be typed anywhere.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to its end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Build the styled line for this input, label included
    pub fn to_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        if !self.label.is_empty() {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            spans.push(Span::styled(format!("{:>10}: ", self.label), label_style));
        }

        if self.content.is_empty() && !self.focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
            return Line::from(spans);
        }

        if !self.focused {
            spans.push(Span::styled(
                self.content.clone(),
                Style::default().fg(Color::Yellow),
            ));
            return Line::from(spans);
        }

        let offset = self.byte_offset(self.cursor);
        let (before, after) = self.content.split_at(offset);
        let mut rest = after.chars();
        let cursor_char = rest.next().unwrap_or(' ');

        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(
            rest.as_str().to_string(),
            Style::default().fg(Color::White),
        ));

        Line::from(spans)
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_line(area.x, area.y, &self.to_line(), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "12.5".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "12.5");

        input.backspace();
        assert_eq!(input.value(), "12.");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_cursor_counts_characters() {
        let mut input = TextInput::new().content("€5");
        assert_eq!(input.cursor, 2);

        input.move_start();
        input.insert('$');
        assert_eq!(input.value(), "$€5");

        input.move_right();
        input.delete();
        assert_eq!(input.value(), "$€");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let input = TextInput::new().label("Date").placeholder("YYYY-MM-DD");
        let text: String = input
            .to_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("YYYY-MM-DD"));
    }
}
