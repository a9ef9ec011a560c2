//! Key help dialog

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

use super::render_dialog_frame;

const KEYS: &[(&str, &str)] = &[
    ("a", "Add transaction"),
    ("c", "Add category"),
    ("w", "Withdraw savings"),
    ("← / →", "Previous / next month"),
    ("j / k", "Scroll transaction log"),
    ("d", "Toggle dark mode"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let height = KEYS.len() as u16 + 4;
    let inner = render_dialog_frame(frame, "Keys", 44, height, &theme);

    let mut lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>8}  ", key),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.fg)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
