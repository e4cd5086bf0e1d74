//! JSON export functionality
//!
//! Pretty-printed JSON exports of expense entries, for handing data to
//! other tools without a spreadsheet in between.

use std::io::Write;

use serde::Serialize;

use crate::catalog::ExpenseTypeCatalog;
use crate::error::ExpenseResult;
use crate::models::Expense;

/// An expense entry with its type name resolved, as exported
#[derive(Debug, Serialize)]
struct ExportedExpense<'a> {
    #[serde(flatten)]
    expense: &'a Expense,
    type_name: Option<&'a str>,
}

/// Export expenses as pretty JSON, embedding resolved type names
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    catalog: &ExpenseTypeCatalog,
    writer: &mut W,
) -> ExpenseResult<()> {
    let exported: Vec<ExportedExpense> = expenses
        .iter()
        .map(|expense| ExportedExpense {
            expense,
            type_name: catalog
                .get(expense.expense_type_id)
                .map(|t| t.name.as_str()),
        })
        .collect();

    serde_json::to_writer_pretty(writer, &exported)?;
    Ok(())
}
