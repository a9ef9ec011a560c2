//! Dialog modules for the TUI
//!
//! Modal forms for recording transactions, creating categories and
//! withdrawing savings, plus the key help.

pub mod category;
pub mod help;
pub mod transaction;
pub mod withdraw;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect_fixed;
use super::theme::Theme;

/// Draw a bordered, cleared dialog box and return its inner area
pub(crate) fn render_dialog_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    theme: &Theme,
) -> Rect {
    let area = centered_rect_fixed(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg).fg(theme.fg));
    frame.render_widget(block, area);

    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    }
}

/// Inline error line under the fields
pub(crate) fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>, theme: &Theme) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(error.to_string(), Style::default().fg(theme.error)));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Key hints shown at the bottom of every form
pub(crate) fn render_form_hints(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(theme.accent)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(theme.income)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(theme.expense)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
