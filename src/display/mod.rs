//! Terminal output formatting
//!
//! Plain-string formatters; the CLI prints what these return.

pub mod catalog;
pub mod expense;

pub use catalog::{format_type_details, format_type_table};
pub use expense::{format_day_groups, format_issues, format_resolution};
