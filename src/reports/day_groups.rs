//! Day-wise expense grouping
//!
//! Groups an employee's expenses by (date, project) with the matching
//! daily allowance attached, most recent day first. This is the shape
//! the expense dashboard renders.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{DailyAllowance, Expense, Money, ProjectId};

/// One day's expenses on one project
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub project_id: ProjectId,
    pub expenses: Vec<Expense>,
    /// The allowance booked for this day/project, if any
    pub allowance: Option<DailyAllowance>,
}

impl DayGroup {
    /// Sum of the expense amounts in this group
    pub fn expense_total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Expense total plus the day's allowance
    pub fn day_total(&self) -> Money {
        self.expense_total()
            + self
                .allowance
                .as_ref()
                .map(|da| da.amount)
                .unwrap_or_default()
    }
}

/// Group expenses by (date, project), attaching allowances
///
/// Returns groups sorted by date descending; groups on the same day
/// keep the order their projects first appear in.
pub fn group_by_day(expenses: &[Expense], allowances: &[DailyAllowance]) -> Vec<DayGroup> {
    let mut grouped: HashMap<(NaiveDate, ProjectId), Vec<Expense>> = HashMap::new();
    let mut first_seen: Vec<(NaiveDate, ProjectId)> = Vec::new();

    for expense in expenses {
        let key = (expense.date, expense.project_id);
        if !grouped.contains_key(&key) {
            first_seen.push(key);
        }
        grouped.entry(key).or_default().push(expense.clone());
    }

    let mut groups: Vec<DayGroup> = first_seen
        .into_iter()
        .map(|(date, project_id)| {
            let expenses = grouped.remove(&(date, project_id)).unwrap_or_default();
            let allowance = allowances
                .iter()
                .find(|da| da.date == date && da.project_id == project_id)
                .cloned();
            DayGroup {
                date,
                project_id,
                expenses,
                allowance,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}
