//! Export command
//!
//! Converts an entries JSON file to CSV or pretty JSON, written to a
//! file or stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::catalog::ExpenseTypeCatalog;
use crate::error::ExpenseResult;
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::models::Expense;

/// Output format for the export command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Read an entries JSON file
pub fn read_entries(path: &Path) -> ExpenseResult<Vec<Expense>> {
    let file = File::open(path)?;
    let entries: Vec<Expense> = serde_json::from_reader(file)?;
    Ok(entries)
}

/// Handle the export command
pub fn handle_export(
    catalog: &ExpenseTypeCatalog,
    entries_path: &Path,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let entries = read_entries(entries_path)?;

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match format {
        ExportFormat::Csv => export_expenses_csv(&entries, catalog, &mut writer)?,
        ExportFormat::Json => export_expenses_json(&entries, catalog, &mut writer)?,
    }

    Ok(())
}
