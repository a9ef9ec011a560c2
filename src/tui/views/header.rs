//! Period header view

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the month label with navigation arrows
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(theme.muted)),
        Span::styled(
            app.period.label(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(theme.muted)),
    ]);

    let block = Block::default()
        .title(" tally ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}
