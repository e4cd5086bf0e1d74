//! expense-desk - Expense-entry domain logic for project expense tracking
//!
//! This library implements the entry-form behavior of a project/expense
//! management application: deriving amounts from kilometers and
//! per-type rates, enforcing maximum amount caps, and mapping
//! expense-type flags to the form fields that must be shown/required.
//! Around that core it carries the surrounding desk work: catalog
//! management, entry validation, backdating grace windows, the
//! approval workflow, allowances, advance settlement, and CSV/JSON
//! import and export.
//!
//! Nothing here persists state or renders UI; catalogs and entries are
//! caller-supplied, and outputs are data for a caller-owned surface to
//! present. The `expenses` binary is one such caller.
//!
//! # Architecture
//!
//! - `config`: settings with serde defaults
//! - `error`: custom error types
//! - `models`: core data models (money, expense types, entries, allowances, advances)
//! - `catalog`: the in-memory expense-type catalog
//! - `resolver`: pure amount/cap/field resolution
//! - `form`: UI-adapter with explicit handler registration
//! - `services`: entry validation, grace windows, approval, settlement, import
//! - `reports`: day grouping and per-type spending summaries
//! - `display`: plain-string terminal formatting
//! - `export`: CSV/JSON writers
//! - `cli`: command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust
//! use expense_desk::catalog::ExpenseTypeCatalog;
//! use expense_desk::resolver;
//! use expense_desk::models::Money;
//!
//! let catalog = ExpenseTypeCatalog::with_defaults();
//! let bike = catalog.find_by_name("Travel - Bike").unwrap();
//!
//! let amount = resolver::compute_amount(bike, Some(12.0));
//! assert_eq!(amount, Money::from_rupees(60));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
pub mod reports;
pub mod resolver;
pub mod services;

pub use error::{ExpenseError, ExpenseResult};
