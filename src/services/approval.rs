//! Approval workflow service
//!
//! Moves expenses through the approval chain: the accountant forwards
//! or decides pending entries, the manager decides forwarded ones.
//! Terminal states are locked; reimbursement happens once, after
//! approval.

use chrono::Utc;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ApprovalStatus, Expense, FinalStatus};

/// Stateless service applying workflow transitions to expenses
pub struct ApprovalService;

impl ApprovalService {
    /// Forward a pending expense to the manager, with an optional
    /// accountant note
    pub fn forward_to_manager(
        expense: &mut Expense,
        remark: Option<String>,
    ) -> ExpenseResult<()> {
        Self::transition(expense, ApprovalStatus::ForwardedToManager)?;
        if remark.is_some() {
            expense.accountant_remark = remark;
        }
        expense.touch();
        Ok(())
    }

    /// Approve an expense for reimbursement
    pub fn approve(expense: &mut Expense, remark: Option<String>) -> ExpenseResult<()> {
        let was_with_manager = expense.status == ApprovalStatus::ForwardedToManager;
        Self::transition(expense, ApprovalStatus::Approved)?;
        expense.final_status = FinalStatus::Approved;
        Self::note_review(expense, was_with_manager, remark);
        Ok(())
    }

    /// Reject an expense
    pub fn reject(expense: &mut Expense, remark: Option<String>) -> ExpenseResult<()> {
        let was_with_manager = expense.status == ApprovalStatus::ForwardedToManager;
        Self::transition(expense, ApprovalStatus::Rejected)?;
        expense.final_status = FinalStatus::Rejected;
        Self::note_review(expense, was_with_manager, remark);
        Ok(())
    }

    /// Mark an approved expense as paid out
    pub fn mark_reimbursed(expense: &mut Expense) -> ExpenseResult<()> {
        if expense.status != ApprovalStatus::Approved {
            return Err(ExpenseError::Approval(format!(
                "Only approved expenses can be reimbursed (status: {})",
                expense.status
            )));
        }
        if expense.reimbursed {
            return Err(ExpenseError::Approval(format!(
                "Expense {} is already reimbursed",
                expense.id
            )));
        }
        expense.reimbursed = true;
        expense.touch();
        Ok(())
    }

    fn transition(expense: &mut Expense, next: ApprovalStatus) -> ExpenseResult<()> {
        if !expense.status.can_transition_to(next) {
            return Err(ExpenseError::Approval(format!(
                "Cannot move expense {} from {} to {}",
                expense.id, expense.status, next
            )));
        }
        expense.status = next;
        Ok(())
    }

    fn note_review(expense: &mut Expense, by_manager: bool, remark: Option<String>) {
        if by_manager {
            expense.manager_reviewed_at = Some(Utc::now());
            if remark.is_some() {
                expense.manager_remark = remark;
            }
        } else if remark.is_some() {
            expense.accountant_remark = remark;
        }
        expense.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeId, ExpenseTypeId, Money, ProjectId};
    use chrono::NaiveDate;

    fn expense() -> Expense {
        Expense::new(
            ExpenseTypeId::new(),
            EmployeeId::new(),
            ProjectId::new(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
        .with_amount(Money::from_rupees(450))
    }

    #[test]
    fn test_forward_then_manager_approves() {
        let mut e = expense();

        ApprovalService::forward_to_manager(&mut e, Some("Looks fine".into())).unwrap();
        assert_eq!(e.status, ApprovalStatus::ForwardedToManager);
        assert_eq!(e.accountant_remark.as_deref(), Some("Looks fine"));
        assert!(!e.is_editable());

        ApprovalService::approve(&mut e, Some("Approved for Q1".into())).unwrap();
        assert_eq!(e.status, ApprovalStatus::Approved);
        assert_eq!(e.final_status, FinalStatus::Approved);
        assert_eq!(e.manager_remark.as_deref(), Some("Approved for Q1"));
        assert!(e.manager_reviewed_at.is_some());
    }

    #[test]
    fn test_accountant_can_decide_directly() {
        let mut e = expense();
        ApprovalService::reject(&mut e, Some("Duplicate claim".into())).unwrap();

        assert_eq!(e.status, ApprovalStatus::Rejected);
        assert_eq!(e.final_status, FinalStatus::Rejected);
        // Decided before the manager saw it
        assert!(e.manager_reviewed_at.is_none());
        assert_eq!(e.accountant_remark.as_deref(), Some("Duplicate claim"));
    }

    #[test]
    fn test_terminal_states_are_locked() {
        let mut e = expense();
        ApprovalService::approve(&mut e, None).unwrap();

        assert!(ApprovalService::reject(&mut e, None).is_err());
        assert!(ApprovalService::forward_to_manager(&mut e, None).is_err());
    }

    #[test]
    fn test_reimbursement_requires_approval() {
        let mut e = expense();
        let err = ApprovalService::mark_reimbursed(&mut e).unwrap_err();
        assert!(matches!(err, ExpenseError::Approval(_)));

        ApprovalService::approve(&mut e, None).unwrap();
        ApprovalService::mark_reimbursed(&mut e).unwrap();
        assert!(e.reimbursed);

        // Only once
        assert!(ApprovalService::mark_reimbursed(&mut e).is_err());
    }

    #[test]
    fn test_forward_keeps_existing_remark_when_none_given() {
        let mut e = expense();
        e.accountant_remark = Some("Initial note".into());
        ApprovalService::forward_to_manager(&mut e, None).unwrap();
        assert_eq!(e.accountant_remark.as_deref(), Some("Initial note"));
    }
}
