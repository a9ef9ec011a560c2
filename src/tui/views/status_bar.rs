//! Status bar view
//!
//! Shows the running total, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = " a:Add  c:Category  w:Withdraw  ←/→:Month  d:Theme  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let total = app.summary.total;
    let total_color = if total.is_negative() {
        theme.expense
    } else {
        theme.income
    };

    let mut spans = vec![
        Span::styled(" Összesen: ", Style::default().fg(theme.fg)),
        Span::styled(
            total.format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(total_color).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.clone(), Style::default().fg(theme.accent)));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
