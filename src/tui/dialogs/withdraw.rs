//! Savings withdrawal dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::error::TallyResult;
use crate::models::{Amount, Transaction};
use crate::services::TransactionService;
use crate::storage::Storage;
use crate::tui::app::App;
use crate::tui::widgets::input::TextInput;

use super::{render_dialog_frame, render_error, render_form_hints};

/// State for the withdrawal dialog
#[derive(Debug, Clone)]
pub struct WithdrawFormState {
    pub amount_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for WithdrawFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl WithdrawFormState {
    pub fn new() -> Self {
        Self {
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 2000"),
            error_message: None,
        }
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Record the withdrawal; the amount field is cleared on success
    pub fn submit(&mut self, storage: &Storage) -> TallyResult<Transaction> {
        let amount = Amount::parse(self.amount_input.value())?;
        let txn = TransactionService::new(storage).add_savings_withdrawal(amount)?;
        self.amount_input.clear();
        self.error_message = None;
        Ok(txn)
    }
}

/// Render the withdrawal dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let form = &app.withdraw_form;
    let inner = render_dialog_frame(frame, "Withdraw Savings", 50, 8, &theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(form.amount_input.to_line(true, &theme)), chunks[0]);
    render_error(frame, chunks[2], form.error_message.as_deref(), &theme);
    render_form_hints(frame, chunks[3], &theme);
}

/// Handle key input for the withdrawal dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Enter => {
            match app.withdraw_form.submit(app.storage) {
                Ok(txn) => {
                    let currency = app.settings.currency_symbol.clone();
                    app.close_dialog();
                    app.refresh();
                    app.set_status(format!(
                        "{}: {}",
                        txn.description,
                        txn.amount.format_with_symbol(&currency)
                    ));
                }
                Err(e) => app.withdraw_form.set_error(e.to_string()),
            }
            true
        }
        code => {
            app.withdraw_form.clear_error();
            app.withdraw_form.amount_input.handle_key(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdraw_negates_amount() {
        let storage = Storage::in_memory();
        let mut form = WithdrawFormState::new();
        for c in "2000".chars() {
            form.amount_input.insert(c);
        }

        let txn = form.submit(&storage).unwrap();
        assert_eq!(txn.amount.value(), -2000.0);
        assert_eq!(txn.category, "megtakarítás");
        assert!(form.amount_input.is_empty());
    }

    #[test]
    fn test_empty_amount_rejected() {
        let storage = Storage::in_memory();
        let mut form = WithdrawFormState::new();
        assert!(form.submit(&storage).is_err());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
