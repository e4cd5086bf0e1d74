//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging
//! the clap argument parsing with the library. All commands are
//! read-only over caller-supplied catalog and entry files.

use std::fs::File;
use std::path::Path;

use crate::catalog::ExpenseTypeCatalog;
use crate::error::ExpenseResult;

pub mod check;
pub mod export;
pub mod preview;
pub mod types;

pub use check::{handle_check, CheckInput};
pub use export::{handle_export, ExportFormat};
pub use preview::handle_preview;
pub use types::{handle_type_command, TypeCommands};

/// Load a catalog file, dispatching on extension (.yaml/.yml vs JSON)
///
/// Without a path, the built-in starter catalog is used.
pub fn load_catalog(path: Option<&Path>) -> ExpenseResult<ExpenseTypeCatalog> {
    let path = match path {
        Some(p) => p,
        None => return Ok(ExpenseTypeCatalog::with_defaults()),
    };

    let file = File::open(path)?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        ExpenseTypeCatalog::from_yaml_reader(file)
    } else {
        ExpenseTypeCatalog::from_json_reader(file)
    }
}
