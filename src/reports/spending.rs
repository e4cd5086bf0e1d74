//! Spending by expense type
//!
//! Summarizes a slice of expenses into per-type rows for a date range,
//! the way the manager dashboard presents claim volume.

use chrono::NaiveDate;

use crate::catalog::ExpenseTypeCatalog;
use crate::models::{ApprovalStatus, Expense, Money};

/// One row of the spending report
#[derive(Debug, Clone)]
pub struct TypeSpending {
    pub type_name: String,
    pub count: usize,
    pub total: Money,
    /// Portion of `total` already approved
    pub approved_total: Money,
}

/// Spending report over a date range (inclusive)
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub rows: Vec<TypeSpending>,
    pub grand_total: Money,
}

/// Build a per-type spending report over `[from, to]`
///
/// Rejected expenses are excluded. Rows are sorted by descending total;
/// entries whose type is missing from the catalog are reported under
/// their raw id.
pub fn spending_by_type(
    expenses: &[Expense],
    catalog: &ExpenseTypeCatalog,
    from: NaiveDate,
    to: NaiveDate,
) -> SpendingReport {
    let mut rows: Vec<TypeSpending> = Vec::new();

    for expense in expenses {
        if expense.date < from || expense.date > to {
            continue;
        }
        if expense.status == ApprovalStatus::Rejected {
            continue;
        }

        let name = catalog
            .get(expense.expense_type_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| expense.expense_type_id.to_string());

        let approved = if expense.status == ApprovalStatus::Approved {
            expense.amount
        } else {
            Money::zero()
        };

        match rows.iter_mut().find(|r| r.type_name == name) {
            Some(row) => {
                row.count += 1;
                row.total += expense.amount;
                row.approved_total += approved;
            }
            None => rows.push(TypeSpending {
                type_name: name,
                count: 1,
                total: expense.amount,
                approved_total: approved,
            }),
        }
    }

    rows.sort_by(|a, b| b.total.cmp(&a.total));
    let grand_total = rows.iter().map(|r| r.total).sum();

    SpendingReport {
        from,
        to,
        rows,
        grand_total,
    }
}
