//! Service layer for expense-desk
//!
//! Business logic over the in-memory models: entry resolution and
//! validation, grace windows, the approval workflow, settlement math,
//! and CSV import.

pub mod approval;
pub mod entry;
pub mod grace;
pub mod import;
pub mod settlement;

pub use approval::ApprovalService;
pub use entry::{EntryCheck, EntryService, FieldIssue};
pub use grace::{GracePolicy, DEFAULT_GRACE_DAYS};
pub use import::{import_expenses, ExpenseCsvFormat, ImportOutcome, SkippedRow};
pub use settlement::{
    advance_remaining, deduct_from_advances, settlement_summary, Deduction, SettlementSummary,
};
