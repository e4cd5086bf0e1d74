//! Settlement math over advances, expenses and allowances
//!
//! A settlement pays out an employee's approved, unreimbursed expenses
//! and approved allowances, first consuming any settled advances the
//! employee still holds. Deductions are drawn most-recent-advance
//! first, one adjustment row per slice.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{
    AdvanceAdjustment, AdvanceRequest, ApprovalStatus, DailyAllowance, EmployeeId, Expense,
    ExpenseId, Money,
};

/// Remaining balance on one advance, given its adjustment history
pub fn advance_remaining(advance: &AdvanceRequest, adjustments: &[AdvanceAdjustment]) -> Money {
    let deducted: Money = adjustments
        .iter()
        .filter(|a| a.advance_id == advance.id)
        .map(|a| a.amount_deducted)
        .sum();
    advance.amount - deducted
}

/// Outcome of deducting an amount across an employee's advances
#[derive(Debug, Clone)]
pub struct Deduction {
    /// Adjustment rows to append to the ledger
    pub adjustments: Vec<AdvanceAdjustment>,
    /// How much the advances covered
    pub deducted: Money,
    /// What is left to pay the employee directly
    pub shortfall: Money,
}

/// Draw `amount` from an employee's settled advances
///
/// Advances are consumed most-recent-first; each slice is recorded as
/// an adjustment referencing `source_expense` when the deduction pays
/// for a specific entry. Advances of other employees and undeductible
/// advances are skipped.
pub fn deduct_from_advances(
    employee: EmployeeId,
    advances: &[AdvanceRequest],
    adjustments: &[AdvanceAdjustment],
    amount: Money,
    source_expense: Option<ExpenseId>,
) -> ExpenseResult<Deduction> {
    if amount.is_negative() {
        return Err(ExpenseError::Settlement(
            "Cannot deduct a negative amount".into(),
        ));
    }

    let mut candidates: Vec<&AdvanceRequest> = advances
        .iter()
        .filter(|a| a.employee_id == employee && a.is_deductible())
        .collect();
    candidates.sort_by(|a, b| {
        b.date_requested
            .cmp(&a.date_requested)
            .then(b.created_at.cmp(&a.created_at))
    });

    let mut to_deduct = amount;
    let mut new_adjustments = Vec::new();

    for advance in candidates {
        if to_deduct.is_zero() {
            break;
        }
        let remaining = advance_remaining(advance, adjustments);
        if !remaining.is_positive() {
            continue;
        }
        let slice = remaining.min(to_deduct);
        new_adjustments.push(AdvanceAdjustment::new(
            advance.id,
            source_expense,
            slice,
        ));
        to_deduct -= slice;
    }

    Ok(Deduction {
        deducted: amount - to_deduct,
        shortfall: to_deduct,
        adjustments: new_adjustments,
    })
}

/// Payout summary for one employee
#[derive(Debug, Clone)]
pub struct SettlementSummary {
    pub employee_id: EmployeeId,
    /// Total of approved, not-yet-reimbursed expenses
    pub expense_total: Money,
    /// Total of approved daily allowances
    pub allowance_total: Money,
    /// Balance still available across settled advances
    pub advance_balance: Money,
    /// What the employee receives after advances are consumed
    pub net_payable: Money,
}

/// Compute the payout summary for an employee
///
/// Entries belonging to other employees are ignored, so callers can
/// pass unfiltered slices.
pub fn settlement_summary(
    employee: EmployeeId,
    expenses: &[Expense],
    allowances: &[DailyAllowance],
    advances: &[AdvanceRequest],
    adjustments: &[AdvanceAdjustment],
) -> SettlementSummary {
    let expense_total: Money = expenses
        .iter()
        .filter(|e| {
            e.employee_id == employee
                && e.status == ApprovalStatus::Approved
                && !e.reimbursed
        })
        .map(|e| e.amount)
        .sum();

    let allowance_total: Money = allowances
        .iter()
        .filter(|da| da.employee_id == employee && da.approved)
        .map(|da| da.amount)
        .sum();

    let advance_balance: Money = advances
        .iter()
        .filter(|a| a.employee_id == employee && a.is_deductible())
        .map(|a| advance_remaining(a, adjustments).max(Money::zero()))
        .sum();

    let payable = expense_total + allowance_total;
    let net_payable = (payable - advance_balance).max(Money::zero());

    SettlementSummary {
        employee_id: employee,
        expense_total,
        allowance_total,
        advance_balance,
        net_payable,
    }
}
