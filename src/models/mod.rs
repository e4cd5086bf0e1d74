//! Core data models for expense-desk
//!
//! This module contains all the data structures that represent the
//! expense domain: expense types, entries, allowances, advances, money.

pub mod advance;
pub mod allowance;
pub mod expense;
pub mod expense_type;
pub mod ids;
pub mod money;

pub use advance::{AdvanceAdjustment, AdvanceRequest, AdvanceStatus};
pub use allowance::{AllowanceRates, AllowanceTier, CountryDaRate, DailyAllowance};
pub use expense::{ApprovalStatus, Expense, FinalStatus};
pub use expense_type::{DefaultExpenseType, ExpenseType};
pub use ids::{AdvanceId, EmployeeId, ExpenseId, ExpenseTypeId, ProjectId};
pub use money::Money;
