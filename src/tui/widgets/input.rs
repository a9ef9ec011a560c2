//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so accented letters and emoji edit correctly.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::tui::theme::Theme;

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
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

    /// Set content, cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

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

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Apply an editing key; returns false for keys the input ignores
    pub fn handle_key(&mut self, code: crossterm::event::KeyCode) -> bool {
        use crossterm::event::KeyCode;

        match code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            KeyCode::Char(c) => self.insert(c),
            _ => return false,
        }
        true
    }

    /// Render as "Label: value" with a block cursor when focused
    pub fn to_line(&self, focused: bool, theme: &Theme) -> Line<'static> {
        let label_style = if focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        let value_style = Style::default().fg(theme.fg);

        let mut spans = vec![Span::styled(format!("{}: ", self.label), label_style)];

        if self.content.is_empty() && !focused {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(theme.muted),
            ));
            return Line::from(spans);
        }

        if !focused {
            spans.push(Span::styled(self.content.clone(), value_style));
            return Line::from(spans);
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let at = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            at.to_string(),
            Style::default().fg(theme.bg).bg(theme.accent),
        ));
        spans.push(Span::styled(after, value_style));
        Line::from(spans)
    }
}
