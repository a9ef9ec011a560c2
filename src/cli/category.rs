//! Category CLI commands
//!
//! Implements CLI commands for custom category management.

use clap::Subcommand;

use crate::display::category::{format_category_details, format_category_list};
use crate::error::TallyResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List built-in and custom categories
    List,

    /// Create a new custom category
    Add {
        /// Category name (must differ from every existing category, ignoring case)
        name: String,
        /// Icon shown before the name, e.g. "🎁"
        icon: String,
    },

    /// Show how a category identifier resolves
    Show {
        /// Category identifier (built-in value or custom name)
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> TallyResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let registry = service.registry()?;
            println!("{}", format_category_list(&registry));
        }

        CategoryCommands::Add { name, icon } => {
            let category = service.add_category(&name, &icon)?;
            println!("Created category: {}", category.display_label());
        }

        CategoryCommands::Show { category } => {
            let resolved = service.resolve(&category)?;
            print!("{}", format_category_details(&category, &resolved));
        }
    }

    Ok(())
}
