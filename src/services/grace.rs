//! Backdating grace windows
//!
//! Expenses may be submitted a limited number of days after they were
//! incurred. A global window applies to everyone; individual employees
//! can carry an override. Updating the global window resets every
//! override to the new value.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::EmployeeId;

/// Default allowed days for backdated submissions
pub const DEFAULT_GRACE_DAYS: u32 = 5;

/// Grace-window policy: global days plus per-employee overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GracePolicy {
    global_days: u32,
    #[serde(default)]
    overrides: HashMap<EmployeeId, u32>,
}

impl Default for GracePolicy {
    fn default() -> Self {
        Self {
            global_days: DEFAULT_GRACE_DAYS,
            overrides: HashMap::new(),
        }
    }
}

impl GracePolicy {
    /// Create a policy with a given global window
    pub fn new(global_days: u32) -> Self {
        Self {
            global_days,
            overrides: HashMap::new(),
        }
    }

    /// The global window in days
    pub fn global_days(&self) -> u32 {
        self.global_days
    }

    /// Set the global window and reset all custom windows to it
    pub fn set_global_days(&mut self, days: u32) {
        self.global_days = days;
        self.overrides.clear();
    }

    /// Give one employee a custom window
    pub fn set_override(&mut self, employee: EmployeeId, days: u32) {
        self.overrides.insert(employee, days);
    }

    /// Drop an employee's custom window, falling back to the global one
    pub fn clear_override(&mut self, employee: EmployeeId) {
        self.overrides.remove(&employee);
    }

    /// The window applying to an employee
    pub fn days_for(&self, employee: EmployeeId) -> u32 {
        self.overrides
            .get(&employee)
            .copied()
            .unwrap_or(self.global_days)
    }

    /// Employees carrying a window different from the global one
    pub fn custom_overrides(&self) -> Vec<(EmployeeId, u32)> {
        let mut customs: Vec<(EmployeeId, u32)> = self
            .overrides
            .iter()
            .filter(|(_, days)| **days != self.global_days)
            .map(|(id, days)| (*id, *days))
            .collect();
        customs.sort_by_key(|(_, days)| *days);
        customs
    }

    /// The earliest expense date an employee may still submit today
    pub fn earliest_allowed(&self, employee: EmployeeId, today: NaiveDate) -> NaiveDate {
        today - chrono::Duration::days(self.days_for(employee) as i64)
    }

    /// Check that an expense date falls inside the employee's window
    pub fn check_submission_date(
        &self,
        employee: EmployeeId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> ExpenseResult<()> {
        if date < self.earliest_allowed(employee, today) {
            return Err(ExpenseError::GraceWindow {
                date: date.to_string(),
                days: self.days_for(employee),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_window() {
        let policy = GracePolicy::default();
        assert_eq!(policy.global_days(), DEFAULT_GRACE_DAYS);
        assert_eq!(policy.days_for(EmployeeId::new()), DEFAULT_GRACE_DAYS);
    }

    #[test]
    fn test_override_applies_to_one_employee() {
        let mut policy = GracePolicy::new(5);
        let alice = EmployeeId::new();
        let bob = EmployeeId::new();

        policy.set_override(alice, 15);
        assert_eq!(policy.days_for(alice), 15);
        assert_eq!(policy.days_for(bob), 5);

        policy.clear_override(alice);
        assert_eq!(policy.days_for(alice), 5);
    }

    #[test]
    fn test_setting_global_resets_overrides() {
        let mut policy = GracePolicy::new(5);
        let alice = EmployeeId::new();
        policy.set_override(alice, 15);

        policy.set_global_days(10);
        assert_eq!(policy.days_for(alice), 10);
        assert!(policy.custom_overrides().is_empty());
    }

    #[test]
    fn test_check_submission_date() {
        let policy = GracePolicy::new(5);
        let emp = EmployeeId::new();
        let today = day(2025, 3, 20);

        // On the boundary: exactly five days back is allowed
        assert!(policy
            .check_submission_date(emp, day(2025, 3, 15), today)
            .is_ok());
        // One day past the window is rejected
        let err = policy
            .check_submission_date(emp, day(2025, 3, 14), today)
            .unwrap_err();
        assert!(matches!(err, ExpenseError::GraceWindow { days: 5, .. }));
        // Current-day and future-dated entries pass the window check
        assert!(policy.check_submission_date(emp, today, today).is_ok());
    }

    #[test]
    fn test_check_uses_employee_override() {
        let mut policy = GracePolicy::new(5);
        let emp = EmployeeId::new();
        policy.set_override(emp, 30);

        let today = day(2025, 3, 31);
        assert!(policy
            .check_submission_date(emp, day(2025, 3, 1), today)
            .is_ok());
    }

    #[test]
    fn test_custom_overrides_listing() {
        let mut policy = GracePolicy::new(5);
        let alice = EmployeeId::new();
        let bob = EmployeeId::new();

        policy.set_override(alice, 15);
        // Matching the global value is not "custom"
        policy.set_override(bob, 5);

        let customs = policy.custom_overrides();
        assert_eq!(customs, vec![(alice, 15)]);
    }
}
