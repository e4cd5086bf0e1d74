//! CSV export functionality
//!
//! Exports expense entries and settlement summaries to CSV format.

use std::io::Write;

use crate::catalog::ExpenseTypeCatalog;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::services::settlement::SettlementSummary;

/// Export expenses to CSV, resolving type names through the catalog
pub fn export_expenses_csv<W: Write>(
    expenses: &[Expense],
    catalog: &ExpenseTypeCatalog,
    writer: &mut W,
) -> ExpenseResult<()> {
    writeln!(
        writer,
        "ID,Date,Type,Kilometers,Amount,From,To,Receipt,Status,Reimbursed,Comments"
    )
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let type_name = catalog
            .get(expense.expense_type_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let km = expense
            .distance_km
            .map(|km| format!("{}", km))
            .unwrap_or_default();

        writeln!(
            writer,
            "{},{},{},{},{:.2},{},{},{},{},{},{}",
            expense.id,
            expense.date,
            escape_csv(&type_name),
            km,
            expense.amount.paise() as f64 / 100.0,
            escape_csv(expense.travel_from.as_deref().unwrap_or("")),
            escape_csv(expense.travel_to.as_deref().unwrap_or("")),
            expense.receipt_attached,
            expense.status,
            expense.reimbursed,
            escape_csv(&expense.comments)
        )
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export settlement summaries to CSV
pub fn export_settlements_csv<W: Write>(
    summaries: &[SettlementSummary],
    writer: &mut W,
) -> ExpenseResult<()> {
    writeln!(
        writer,
        "Employee,Expense Total,Allowance Total,Advance Balance,Net Payable"
    )
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for summary in summaries {
        writeln!(
            writer,
            "{},{:.2},{:.2},{:.2},{:.2}",
            summary.employee_id,
            summary.expense_total.paise() as f64 / 100.0,
            summary.allowance_total.paise() as f64 / 100.0,
            summary.advance_balance.paise() as f64 / 100.0,
            summary.net_payable.paise() as f64 / 100.0
        )
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeId, ExpenseType, Money, ProjectId};
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses_csv() {
        let mut catalog = ExpenseTypeCatalog::new();
        let bike = catalog
            .add(ExpenseType::with_rate("Travel - Bike", Money::from_rupees(5)))
            .unwrap();

        let expense = Expense::new(
            bike,
            EmployeeId::new(),
            ProjectId::new(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
        .with_distance(12.0)
        .with_amount(Money::from_rupees(60))
        .with_travel("Office", "Client, site");

        let mut out = Vec::new();
        export_expenses_csv(&[expense], &catalog, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert!(csv.starts_with("ID,Date,Type"));
        assert!(csv.contains("Travel - Bike"));
        assert!(csv.contains("60.00"));
        // Comma in the destination forces quoting
        assert!(csv.contains("\"Client, site\""));
    }

    #[test]
    fn test_export_unknown_type() {
        let catalog = ExpenseTypeCatalog::new();
        let expense = Expense::new(
            crate::models::ExpenseTypeId::new(),
            EmployeeId::new(),
            ProjectId::new(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        );

        let mut out = Vec::new();
        export_expenses_csv(&[expense], &catalog, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Unknown"));
    }

    #[test]
    fn test_export_settlements_csv() {
        let summary = SettlementSummary {
            employee_id: EmployeeId::new(),
            expense_total: Money::from_rupees(1000),
            allowance_total: Money::from_rupees(350),
            advance_balance: Money::from_rupees(600),
            net_payable: Money::from_rupees(750),
        };

        let mut out = Vec::new();
        export_settlements_csv(&[summary], &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert!(csv.contains("Net Payable"));
        assert!(csv.contains("750.00"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
