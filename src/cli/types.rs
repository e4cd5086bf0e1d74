//! Expense-type CLI commands
//!
//! Read-only commands over a caller-supplied catalog file.

use clap::Subcommand;

use crate::catalog::ExpenseTypeCatalog;
use crate::display::{format_type_details, format_type_table};
use crate::error::{ExpenseError, ExpenseResult};

/// Expense-type subcommands
#[derive(Subcommand)]
pub enum TypeCommands {
    /// List all expense types
    List,

    /// Show one expense type and the form fields it requires
    Show {
        /// Expense type name or ID
        expense_type: String,
    },
}

/// Handle an expense-type command
pub fn handle_type_command(
    catalog: &ExpenseTypeCatalog,
    cmd: TypeCommands,
) -> ExpenseResult<()> {
    match cmd {
        TypeCommands::List => {
            print!("{}", format_type_table(&catalog.list()));
        }

        TypeCommands::Show { expense_type } => {
            let def = catalog
                .find(&expense_type)
                .ok_or_else(|| ExpenseError::expense_type_not_found(expense_type.clone()))?;
            print!("{}", format_type_details(def));
        }
    }

    Ok(())
}
