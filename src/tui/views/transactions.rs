//! Transaction log view
//!
//! One line per transaction in insertion order, expenses in the expense
//! colour, and the running total pinned under the list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the log and total
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let currency = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(" Tranzakciók ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    if app.summary.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No transactions yet. Press 'a' to add one.",
                Style::default().fg(theme.muted),
            )),
            chunks[0],
        );
    } else {
        let items: Vec<ListItem> = app
            .summary
            .lines
            .iter()
            .skip(app.scroll_offset)
            .map(|line| {
                let amount_color = if line.display_amount.is_negative() {
                    theme.expense
                } else {
                    theme.income
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}: ", line.description), Style::default().fg(theme.fg)),
                    Span::styled(
                        line.display_amount.format_with_symbol(currency),
                        Style::default().fg(amount_color),
                    ),
                    Span::styled(
                        format!(" ({})", line.category_label),
                        Style::default().fg(theme.muted),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), chunks[0]);
    }

    let total = app.summary.total;
    let total_color = if total.is_negative() {
        theme.expense
    } else {
        theme.income
    };
    let total_line = Line::from(vec![
        Span::styled("Összesen: ", Style::default().fg(theme.fg)),
        Span::styled(
            total.format_with_symbol(currency),
            Style::default().fg(total_color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(total_line), chunks[1]);
}
