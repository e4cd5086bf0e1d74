//! CSV expense import
//!
//! Reads expense rows exported from spreadsheets into entries,
//! resolving type names through the catalog and validating each row.
//! Bad rows are skipped with a per-row reason rather than failing the
//! whole file.

use std::io::Read;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::catalog::ExpenseTypeCatalog;
use crate::error::ExpenseResult;
use crate::models::{EmployeeId, Expense, Money, ProjectId};
use crate::services::entry::EntryService;

/// Column layout of an expense CSV
#[derive(Debug, Clone)]
pub struct ExpenseCsvFormat {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the expense-type name column
    pub type_column: usize,
    /// Index of the kilometers column, blank for direct-amount rows
    pub distance_column: Option<usize>,
    /// Index of the amount column
    pub amount_column: Option<usize>,
    /// Index of the travel-origin column
    pub travel_from_column: Option<usize>,
    /// Index of the travel-destination column
    pub travel_to_column: Option<usize>,
    /// Index of the comments column
    pub comments_column: Option<usize>,
    /// Date format string (e.g., "%Y-%m-%d", "%d/%m/%Y")
    pub date_format: String,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: char,
    /// Whether imported rows count as having a receipt attached
    pub assume_receipts: bool,
}

impl Default for ExpenseCsvFormat {
    fn default() -> Self {
        Self {
            date_column: 0,
            type_column: 1,
            distance_column: Some(2),
            amount_column: Some(3),
            travel_from_column: Some(4),
            travel_to_column: Some(5),
            comments_column: Some(6),
            date_format: "%Y-%m-%d".to_string(),
            has_header: true,
            delimiter: ',',
            assume_receipts: false,
        }
    }
}

impl ExpenseCsvFormat {
    /// Set the date format
    pub fn with_date_format(mut self, format: &str) -> Self {
        self.date_format = format.to_string();
        self
    }

    /// Set whether first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Treat every imported row as receipt-backed
    pub fn assuming_receipts(mut self) -> Self {
        self.assume_receipts = true;
        self
    }
}

/// A row that could not be imported
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: usize,
    pub reason: String,
}

/// Result of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub imported: Vec<Expense>,
    pub skipped: Vec<SkippedRow>,
}

/// Import expenses for one employee and project from a CSV reader
pub fn import_expenses<R: Read>(
    reader: R,
    catalog: &ExpenseTypeCatalog,
    employee: EmployeeId,
    project: ProjectId,
    format: &ExpenseCsvFormat,
) -> ExpenseResult<ImportOutcome> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(format.has_header)
        .delimiter(format.delimiter as u8)
        .flexible(true)
        .from_reader(reader);

    let service = EntryService::new(catalog);
    let mut outcome = ImportOutcome::default();
    let first_data_line = if format.has_header { 2 } else { 1 };

    for (i, record) in csv_reader.records().enumerate() {
        let line = first_data_line + i;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                outcome.skipped.push(SkippedRow {
                    line,
                    reason: format!("unreadable row: {}", e),
                });
                continue;
            }
        };

        match build_row(&record, format, catalog, employee, project) {
            Ok(mut expense) => {
                let check = service.resolve(&mut expense)?;
                if check.is_ok() {
                    outcome.imported.push(expense);
                } else {
                    let reasons: Vec<String> =
                        check.issues.iter().map(|i| i.to_string()).collect();
                    outcome.skipped.push(SkippedRow {
                        line,
                        reason: reasons.join("; "),
                    });
                }
            }
            Err(reason) => outcome.skipped.push(SkippedRow { line, reason }),
        }
    }

    Ok(outcome)
}

fn build_row(
    record: &csv::StringRecord,
    format: &ExpenseCsvFormat,
    catalog: &ExpenseTypeCatalog,
    employee: EmployeeId,
    project: ProjectId,
) -> Result<Expense, String> {
    let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or("");

    let date_str = field(format.date_column);
    let date = NaiveDate::parse_from_str(date_str, &format.date_format)
        .map_err(|_| format!("invalid date: {:?}", date_str))?;

    let type_name = field(format.type_column);
    let def = catalog
        .find(type_name)
        .ok_or_else(|| format!("unknown expense type: {:?}", type_name))?;

    let mut expense = Expense::new(def.id, employee, project, date);

    if let Some(idx) = format.distance_column {
        let raw = field(idx);
        if !raw.is_empty() {
            let km: f64 = raw
                .parse()
                .map_err(|_| format!("invalid kilometers: {:?}", raw))?;
            expense.distance_km = Some(km);
        }
    }

    if let Some(idx) = format.amount_column {
        let raw = field(idx);
        if !raw.is_empty() {
            expense.amount =
                Money::parse(raw).map_err(|_| format!("invalid amount: {:?}", raw))?;
        }
    }

    if let Some(idx) = format.travel_from_column {
        let raw = field(idx);
        if !raw.is_empty() {
            expense.travel_from = Some(raw.to_string());
        }
    }

    if let Some(idx) = format.travel_to_column {
        let raw = field(idx);
        if !raw.is_empty() {
            expense.travel_to = Some(raw.to_string());
        }
    }

    if let Some(idx) = format.comments_column {
        expense.comments = field(idx).to_string();
    }

    expense.receipt_attached = format.assume_receipts;

    Ok(expense)
}
