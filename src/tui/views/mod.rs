//! TUI Views module
//!
//! The dashboard: period header, transaction log, expense chart and
//! status bar, with the active dialog drawn on top.

pub mod chart;
pub mod header;
pub mod status_bar;
pub mod transactions;

use ratatui::{style::Style, widgets::Block, Frame};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    transactions::render(frame, app, layout.log);
    chart::render(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::AddCategory => dialogs::category::render(frame, app),
        ActiveDialog::Withdraw => dialogs::withdraw::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Amount, Transaction};
    use crate::storage::Storage;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty_dashboard() {
        let storage = Storage::in_memory();
        let app = App::new(&storage, &Settings::default(), None);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Aktuális hónap"));
        assert!(text.contains("Nincs elég adat a grafikonhoz"));
    }

    #[test]
    fn test_render_with_transactions_and_dialog() {
        let storage = Storage::in_memory();
        storage
            .transactions
            .append(Transaction::new("Bolt", Amount::new(300.0).unwrap(), "kiadás"))
            .unwrap();
        let mut app = App::new(&storage, &Settings::default(), None);
        app.open_dialog(ActiveDialog::Help);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Bolt: -300 Ft"));
        assert!(text.contains("Withdraw savings"));
    }
}
