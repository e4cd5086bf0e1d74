//! Check command
//!
//! Validates a prospective expense entry end to end: field rules for
//! its type plus the backdating grace window.

use chrono::NaiveDate;

use crate::catalog::ExpenseTypeCatalog;
use crate::display::format_issues;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{EmployeeId, Expense, Money, ProjectId};
use crate::services::entry::EntryService;
use crate::services::grace::GracePolicy;

/// Input for the check command, straight from the CLI flags
pub struct CheckInput {
    pub expense_type: String,
    pub date: String,
    pub distance_km: Option<f64>,
    pub amount: Option<String>,
    pub travel_from: Option<String>,
    pub travel_to: Option<String>,
    pub receipt: bool,
}

/// Handle the check command; `today` is injected for testability
pub fn handle_check(
    catalog: &ExpenseTypeCatalog,
    grace: &GracePolicy,
    input: CheckInput,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let def = catalog
        .find(&input.expense_type)
        .ok_or_else(|| ExpenseError::expense_type_not_found(input.expense_type.clone()))?;

    let date = NaiveDate::parse_from_str(&input.date, "%Y-%m-%d")
        .map_err(|_| ExpenseError::Validation(format!("Invalid date: {}", input.date)))?;

    // The check stands in for a real employee/project pair
    let employee = EmployeeId::new();
    let mut expense = Expense::new(def.id, employee, ProjectId::new(), date);
    expense.distance_km = input.distance_km;
    expense.travel_from = input.travel_from;
    expense.travel_to = input.travel_to;
    expense.receipt_attached = input.receipt;

    if let Some(raw) = input.amount {
        expense.amount =
            Money::parse(&raw).map_err(|e| ExpenseError::Validation(e.to_string()))?;
    }

    grace.check_submission_date(employee, date, today)?;

    let service = EntryService::new(catalog);
    let check = service.resolve(&mut expense)?;

    println!("Amount: {}", expense.amount);
    if let Some(notice) = check.resolution.cap_notice {
        println!(
            "Note: amount exceeds the maximum for this type and was reduced to {}",
            notice.cap
        );
    }
    print!("{}", format_issues(&check.issues));

    if !check.is_ok() {
        return Err(ExpenseError::Validation(format!(
            "{} field issue(s)",
            check.issues.len()
        )));
    }

    Ok(())
}
