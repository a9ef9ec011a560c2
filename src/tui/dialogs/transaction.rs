//! Transaction entry dialog
//!
//! Description, amount and a category picker over the built-in and custom
//! categories. A successful save clears the fields and keeps the selected
//! category.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::error::TallyResult;
use crate::models::{Amount, CategoryOption, Transaction};
use crate::services::TransactionService;
use crate::storage::Storage;
use crate::tui::app::App;
use crate::tui::widgets::input::TextInput;

use super::{render_dialog_frame, render_error, render_form_hints};

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Description,
    Amount,
    Category,
}

impl TransactionField {
    fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the transaction form dialog
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    pub description_input: TextInput,
    pub amount_input: TextInput,
    /// Picker options, built-ins first
    pub options: Vec<CategoryOption>,
    pub selected_option: usize,
    pub focused_field: TransactionField,
    pub error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    pub fn new() -> Self {
        Self {
            description_input: TextInput::new()
                .label("Description")
                .placeholder("e.g. Fizetés"),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 5000"),
            options: Vec::new(),
            selected_option: 0,
            focused_field: TransactionField::default(),
            error_message: None,
        }
    }

    /// Replace the picker options, keeping the selection when it still exists
    pub fn set_options(&mut self, options: Vec<CategoryOption>) {
        let current = self.selected_category().map(str::to_string);
        self.options = options;
        self.selected_option = current
            .and_then(|value| self.options.iter().position(|o| o.value == value))
            .unwrap_or(0);
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.options
            .get(self.selected_option)
            .map(|o| o.value.as_str())
    }

    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected_option)
            .map(|o| o.label.as_str())
            .unwrap_or("(no categories)")
    }

    pub fn next_option(&mut self) {
        if !self.options.is_empty() {
            self.selected_option = (self.selected_option + 1) % self.options.len();
        }
    }

    pub fn prev_option(&mut self) {
        if !self.options.is_empty() {
            self.selected_option =
                (self.selected_option + self.options.len() - 1) % self.options.len();
        }
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear the text fields after a successful save
    pub fn reset_fields(&mut self) {
        self.description_input.clear();
        self.amount_input.clear();
        self.focused_field = TransactionField::Description;
        self.error_message = None;
    }

    /// Validate and record the transaction
    pub fn submit(&mut self, storage: &Storage) -> TallyResult<Transaction> {
        let amount = Amount::parse(self.amount_input.value())?;
        let category = self
            .selected_category()
            .unwrap_or(crate::models::category::INCOME)
            .to_string();

        let txn = TransactionService::new(storage).add(
            self.description_input.value(),
            amount,
            &category,
        )?;
        self.reset_fields();
        Ok(txn)
    }
}

/// Render the transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let form = &app.transaction_form;
    let inner = render_dialog_frame(frame, "Add Transaction", 60, 11, &theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(
            form.description_input
                .to_line(form.focused_field == TransactionField::Description, &theme),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            form.amount_input
                .to_line(form.focused_field == TransactionField::Amount, &theme),
        ),
        chunks[1],
    );

    let focused = form.focused_field == TransactionField::Category;
    let label_style = if focused {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    let value_style = if focused {
        Style::default().fg(theme.bg).bg(theme.accent)
    } else {
        Style::default().fg(theme.fg)
    };
    let picker = Line::from(vec![
        Span::styled("Category: ", label_style),
        Span::styled(format!(" {} ", form.selected_label()), value_style),
        Span::styled(
            if focused { " ◀ ▶" } else { "" },
            Style::default().fg(theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(picker), chunks[2]);

    render_error(frame, chunks[4], form.error_message.as_deref(), &theme);
    render_form_hints(frame, chunks[5], &theme);
}

/// Handle key input for the transaction dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            let form = &mut app.transaction_form;
            form.focused_field = form.focused_field.next();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            let form = &mut app.transaction_form;
            form.focused_field = form.focused_field.prev();
            true
        }
        KeyCode::Enter => {
            match app.transaction_form.submit(app.storage) {
                Ok(txn) => {
                    app.close_dialog();
                    app.refresh();
                    app.set_status(format!("Recorded: {}", txn.description));
                }
                Err(e) => app.transaction_form.set_error(e.to_string()),
            }
            true
        }
        code => {
            let form = &mut app.transaction_form;
            match form.focused_field {
                TransactionField::Description => {
                    form.clear_error();
                    form.description_input.handle_key(code)
                }
                TransactionField::Amount => {
                    form.clear_error();
                    form.amount_input.handle_key(code)
                }
                TransactionField::Category => match code {
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                        form.next_option();
                        true
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        form.prev_option();
                        true
                    }
                    _ => false,
                },
            }
        }
    }
}
