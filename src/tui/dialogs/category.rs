//! Category entry dialog
//!
//! Modal dialog for creating a custom category from a name and an icon.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::error::TallyResult;
use crate::models::CustomCategory;
use crate::services::CategoryService;
use crate::storage::Storage;
use crate::tui::app::App;
use crate::tui::widgets::input::TextInput;

use super::{render_dialog_frame, render_error, render_form_hints};

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryField {
    #[default]
    Name,
    Icon,
}

/// State for the category form dialog
#[derive(Debug, Clone)]
pub struct CategoryFormState {
    pub name_input: TextInput,
    pub icon_input: TextInput,
    pub focused_field: CategoryField,
    pub error_message: Option<String>,
}

impl Default for CategoryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryFormState {
    pub fn new() -> Self {
        Self {
            name_input: TextInput::new().label("Name").placeholder("e.g. Rezsi"),
            icon_input: TextInput::new().label("Icon").placeholder("e.g. 💡"),
            focused_field: CategoryField::Name,
            error_message: None,
        }
    }

    pub fn toggle_field(&mut self) {
        self.focused_field = match self.focused_field {
            CategoryField::Name => CategoryField::Icon,
            CategoryField::Icon => CategoryField::Name,
        };
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            CategoryField::Name => &mut self.name_input,
            CategoryField::Icon => &mut self.icon_input,
        }
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Validate and create the category; fields are cleared on success
    pub fn submit(&mut self, storage: &Storage) -> TallyResult<CustomCategory> {
        let category = CategoryService::new(storage)
            .add_category(self.name_input.value(), self.icon_input.value())?;

        self.name_input.clear();
        self.icon_input.clear();
        self.focused_field = CategoryField::Name;
        self.error_message = None;
        Ok(category)
    }
}

/// Render the category dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let form = &app.category_form;
    let inner = render_dialog_frame(frame, "Add Category", 50, 9, &theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Icon
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(
            form.name_input
                .to_line(form.focused_field == CategoryField::Name, &theme),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            form.icon_input
                .to_line(form.focused_field == CategoryField::Icon, &theme),
        ),
        chunks[1],
    );

    render_error(frame, chunks[3], form.error_message.as_deref(), &theme);
    render_form_hints(frame, chunks[4], &theme);
}

/// Handle key input for the category dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.category_form.toggle_field();
            true
        }
        KeyCode::Enter => {
            match app.category_form.submit(app.storage) {
                Ok(category) => {
                    app.close_dialog();
                    app.refresh();
                    app.set_status(format!("Category '{}' created", category.display_label()));
                }
                Err(e) => app.category_form.set_error(e.to_string()),
            }
            true
        }
        code => {
            let form = &mut app.category_form;
            form.clear_error();
            form.focused_input().handle_key(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut CategoryFormState, name: &str, icon: &str) {
        for c in name.chars() {
            form.name_input.insert(c);
        }
        for c in icon.chars() {
            form.icon_input.insert(c);
        }
    }

    #[test]
    fn test_submit_creates_and_clears() {
        let storage = Storage::in_memory();
        let mut form = CategoryFormState::new();
        fill(&mut form, "Ajándék", "🎁");

        let category = form.submit(&storage).unwrap();
        assert_eq!(category.display_label(), "🎁 Ajándék");
        assert!(form.name_input.is_empty());
        assert!(form.icon_input.is_empty());
        assert_eq!(storage.categories.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_keeps_fields() {
        let storage = Storage::in_memory();
        let mut form = CategoryFormState::new();
        fill(&mut form, "Kiadás", "🛒");

        assert!(form.submit(&storage).unwrap_err().is_duplicate());
        assert_eq!(form.name_input.value(), "Kiadás");
        assert_eq!(storage.categories.count().unwrap(), 0);
    }

    #[test]
    fn test_missing_icon_rejected() {
        let storage = Storage::in_memory();
        let mut form = CategoryFormState::new();
        fill(&mut form, "Rezsi", "");

        let err = form.submit(&storage).unwrap_err();
        assert_eq!(err.to_string(), "Category icon cannot be empty");
    }
}
