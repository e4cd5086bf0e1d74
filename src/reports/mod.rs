//! Read-only summaries over expense data

pub mod day_groups;
pub mod spending;

pub use day_groups::{group_by_day, DayGroup};
pub use spending::{spending_by_type, SpendingReport, TypeSpending};
