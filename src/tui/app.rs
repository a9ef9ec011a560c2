//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::paths::TallyPaths;
use crate::config::settings::Settings;
use crate::models::PeriodCursor;
use crate::reports::LedgerSummary;
use crate::storage::Storage;

use super::dialogs::category::CategoryFormState;
use super::dialogs::transaction::TransactionFormState;
use super::dialogs::withdraw::WithdrawFormState;
use super::theme::Theme;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    AddCategory,
    Withdraw,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Paths configuration, used to persist settings
    pub paths: Option<&'a TallyPaths>,

    /// Application settings (dark mode can change at runtime)
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Month shown in the header
    pub period: PeriodCursor,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Log lines, total and expense breakdown, rebuilt after each mutation
    pub summary: LedgerSummary,

    /// Scroll offset for the transaction log
    pub scroll_offset: usize,

    /// Status message to display
    pub status_message: Option<String>,

    pub transaction_form: TransactionFormState,
    pub category_form: CategoryFormState,
    pub withdraw_form: WithdrawFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &Settings, paths: Option<&'a TallyPaths>) -> Self {
        let (summary, load_error) = match LedgerSummary::generate(storage) {
            Ok(summary) => (summary, None),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load ledger view");
                (
                    LedgerSummary::from_parts(&[], Default::default()),
                    Some(format!("Error: {}", e)),
                )
            }
        };

        let mut app = Self {
            storage,
            paths,
            settings: settings.clone(),
            should_quit: false,
            period: PeriodCursor::current(),
            active_dialog: ActiveDialog::default(),
            summary,
            scroll_offset: 0,
            status_message: load_error,
            transaction_form: TransactionFormState::new(),
            category_form: CategoryFormState::new(),
            withdraw_form: WithdrawFormState::new(),
        };
        app.transaction_form.set_options(app.summary.registry().options());
        app
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.settings.dark_mode)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Rebuild the derived view state from storage
    pub fn refresh(&mut self) {
        match LedgerSummary::generate(self.storage) {
            Ok(summary) => {
                self.summary = summary;
                self.transaction_form
                    .set_options(self.summary.registry().options());
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to refresh ledger view");
                self.set_status(format!("Error: {}", e));
            }
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::AddTransaction => self.transaction_form.clear_error(),
            ActiveDialog::AddCategory => self.category_form.clear_error(),
            ActiveDialog::Withdraw => self.withdraw_form.clear_error(),
            ActiveDialog::Help | ActiveDialog::None => {}
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Go to the previous month
    pub fn prev_period(&mut self) {
        if let Err(e) = self.period.retreat() {
            self.set_status(e.to_string());
        }
    }

    /// Go to the next month
    pub fn next_period(&mut self) {
        if let Err(e) = self.period.advance() {
            self.set_status(e.to_string());
        }
    }

    /// Flip between light and dark mode and remember the choice
    pub fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;

        if let Some(paths) = self.paths {
            if let Err(e) = self.settings.save(paths) {
                tracing::warn!(error = %e, "failed to persist dark mode");
                self.set_status(format!("Could not save settings: {}", e));
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.summary.lines.len() {
            self.scroll_offset += 1;
        }
    }
}
