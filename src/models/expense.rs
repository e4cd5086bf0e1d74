//! Expense entry model
//!
//! Represents a single expense claim with its approval state. Amounts
//! on distance-priced types are derived, never entered; the entry only
//! stores the result.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{EmployeeId, ExpenseId, ExpenseTypeId, ProjectId};
use super::money::Money;

/// Where an expense sits in the approval chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalStatus {
    /// Submitted, waiting on the accountant
    #[default]
    Pending,
    /// Accountant passed it on for manager review
    ForwardedToManager,
    /// Accepted for reimbursement
    Approved,
    /// Declined
    Rejected,
}

impl ApprovalStatus {
    /// Check whether the workflow allows moving from this status to `next`
    pub fn can_transition_to(&self, next: ApprovalStatus) -> bool {
        use ApprovalStatus::*;
        matches!(
            (self, next),
            (Pending, ForwardedToManager)
                | (Pending, Approved)
                | (Pending, Rejected)
                | (ForwardedToManager, Approved)
                | (ForwardedToManager, Rejected)
        )
    }

    /// Check if no further transitions are possible
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::ForwardedToManager => write!(f, "Forwarded to Manager"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// The settled outcome of an expense, independent of who decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FinalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for FinalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// A single expense claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// The catalog type this expense was filed under
    pub expense_type_id: ExpenseTypeId,

    /// The claiming employee
    pub employee_id: EmployeeId,

    /// The project the expense is booked against
    pub project_id: ProjectId,

    /// The day the expense was incurred
    pub date: NaiveDate,

    /// Kilometers traveled, for distance-priced types
    pub distance_km: Option<f64>,

    /// Claimed amount; derived from distance when the type requires it
    pub amount: Money,

    /// Travel origin, for travel types
    pub travel_from: Option<String>,

    /// Travel destination, for travel types
    pub travel_to: Option<String>,

    /// Whether a receipt is attached
    #[serde(default)]
    pub receipt_attached: bool,

    /// Free-form remarks from the employee
    #[serde(default)]
    pub comments: String,

    /// Current position in the approval chain
    #[serde(default)]
    pub status: ApprovalStatus,

    /// Settled outcome
    #[serde(default)]
    pub final_status: FinalStatus,

    /// Note left by the accountant when forwarding or deciding
    pub accountant_remark: Option<String>,

    /// Note left by the manager when deciding
    pub manager_remark: Option<String>,

    /// When the manager reviewed the expense
    pub manager_reviewed_at: Option<DateTime<Utc>>,

    /// Whether the approved amount has been paid out
    #[serde(default)]
    pub reimbursed: bool,

    /// When the expense was created
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new pending expense
    pub fn new(
        expense_type_id: ExpenseTypeId,
        employee_id: EmployeeId,
        project_id: ProjectId,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            expense_type_id,
            employee_id,
            project_id,
            date,
            distance_km: None,
            amount: Money::zero(),
            travel_from: None,
            travel_to: None,
            receipt_attached: false,
            comments: String::new(),
            status: ApprovalStatus::Pending,
            final_status: FinalStatus::Pending,
            accountant_remark: None,
            manager_remark: None,
            manager_reviewed_at: None,
            reimbursed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the traveled distance
    pub fn with_distance(mut self, km: f64) -> Self {
        self.distance_km = Some(km);
        self
    }

    /// Set a directly-entered amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Set the travel endpoints
    pub fn with_travel(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.travel_from = Some(from.into());
        self.travel_to = Some(to.into());
        self
    }

    /// Mark a receipt as attached
    pub fn with_receipt(mut self) -> Self {
        self.receipt_attached = true;
        self
    }

    /// Check whether the entry may still be edited by the employee
    pub fn is_editable(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }

    /// Bump the modification stamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense() -> Expense {
        Expense::new(
            ExpenseTypeId::new(),
            EmployeeId::new(),
            ProjectId::new(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
    }

    #[test]
    fn test_new_expense_defaults() {
        let e = sample_expense();
        assert_eq!(e.status, ApprovalStatus::Pending);
        assert_eq!(e.final_status, FinalStatus::Pending);
        assert_eq!(e.amount, Money::zero());
        assert!(!e.reimbursed);
        assert!(e.is_editable());
    }

    #[test]
    fn test_builders() {
        let e = sample_expense()
            .with_distance(18.0)
            .with_travel("Pune", "Mumbai")
            .with_receipt();
        assert_eq!(e.distance_km, Some(18.0));
        assert_eq!(e.travel_from.as_deref(), Some("Pune"));
        assert_eq!(e.travel_to.as_deref(), Some("Mumbai"));
        assert!(e.receipt_attached);
    }

    #[test]
    fn test_status_transitions() {
        use ApprovalStatus::*;

        assert!(Pending.can_transition_to(ForwardedToManager));
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(ForwardedToManager.can_transition_to(Approved));
        assert!(ForwardedToManager.can_transition_to(Rejected));

        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Approved));
        assert!(!ForwardedToManager.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_final_states() {
        assert!(ApprovalStatus::Approved.is_final());
        assert!(ApprovalStatus::Rejected.is_final());
        assert!(!ApprovalStatus::Pending.is_final());
        assert!(!ApprovalStatus::ForwardedToManager.is_final());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(
            ApprovalStatus::ForwardedToManager.to_string(),
            "Forwarded to Manager"
        );
        assert_eq!(ApprovalStatus::Pending.to_string(), "Pending");
    }

    #[test]
    fn test_serialization() {
        let e = sample_expense().with_distance(10.0).with_receipt();
        let json = serde_json::to_string(&e).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(e.id, deserialized.id);
        assert_eq!(e.distance_km, deserialized.distance_km);
        assert_eq!(e.status, deserialized.status);
    }
}
