//! Advance request models
//!
//! Employees can draw cash advances against a project; settled advances
//! are later consumed by expense settlements, one adjustment log row
//! per deduction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AdvanceId, EmployeeId, ExpenseId};
use super::money::Money;

/// Lifecycle of an advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AdvanceStatus {
    #[default]
    Submitted,
    Approved,
    /// Paid out and available for settlement deductions
    Settled,
    Rejected,
}

impl fmt::Display for AdvanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted => write!(f, "Submitted"),
            Self::Approved => write!(f, "Approved"),
            Self::Settled => write!(f, "Settled"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A cash advance drawn by an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceRequest {
    pub id: AdvanceId,
    pub employee_id: EmployeeId,
    pub amount: Money,
    pub date_requested: NaiveDate,

    #[serde(default)]
    pub status: AdvanceStatus,

    pub created_at: DateTime<Utc>,
}

impl AdvanceRequest {
    pub fn new(employee_id: EmployeeId, amount: Money, date_requested: NaiveDate) -> Self {
        Self {
            id: AdvanceId::new(),
            employee_id,
            amount,
            date_requested,
            status: AdvanceStatus::Submitted,
            created_at: Utc::now(),
        }
    }

    /// Create an advance already paid out and deductible
    pub fn settled(employee_id: EmployeeId, amount: Money, date_requested: NaiveDate) -> Self {
        let mut adv = Self::new(employee_id, amount, date_requested);
        adv.status = AdvanceStatus::Settled;
        adv
    }

    /// Whether settlement deductions may draw on this advance
    pub fn is_deductible(&self) -> bool {
        self.status == AdvanceStatus::Settled
    }
}

/// One deduction taken from an advance during settlement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceAdjustment {
    pub advance_id: AdvanceId,

    /// The expense this deduction paid for, if any
    pub expense_id: Option<ExpenseId>,

    pub amount_deducted: Money,
    pub noted_at: DateTime<Utc>,
}

impl AdvanceAdjustment {
    pub fn new(advance_id: AdvanceId, expense_id: Option<ExpenseId>, amount: Money) -> Self {
        Self {
            advance_id,
            expense_id,
            amount_deducted: amount,
            noted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_advance() {
        let adv = AdvanceRequest::new(
            EmployeeId::new(),
            Money::from_rupees(5000),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        );
        assert_eq!(adv.status, AdvanceStatus::Submitted);
        assert!(!adv.is_deductible());
    }

    #[test]
    fn test_settled_is_deductible() {
        let adv = AdvanceRequest::settled(
            EmployeeId::new(),
            Money::from_rupees(5000),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        );
        assert!(adv.is_deductible());
    }

    #[test]
    fn test_serialization() {
        let adv = AdvanceRequest::settled(
            EmployeeId::new(),
            Money::from_rupees(2500),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        );
        let json = serde_json::to_string(&adv).unwrap();
        let deserialized: AdvanceRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(adv.id, deserialized.id);
        assert_eq!(adv.status, deserialized.status);
    }
}
