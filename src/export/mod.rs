//! Export functionality for expense data
//!
//! Writers take any `io::Write`, so exports can target files, buffers,
//! or stdout.

pub mod csv;
pub mod json;

pub use csv::{export_expenses_csv, export_settlements_csv};
pub use json::export_expenses_json;
