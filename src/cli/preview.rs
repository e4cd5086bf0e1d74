//! Preview command
//!
//! Resolves a type + input the way the entry form would, without
//! creating anything: derived amount, cap notice, visible fields.

use crate::catalog::ExpenseTypeCatalog;
use crate::display::format_resolution;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::resolver;

/// Handle the preview command
pub fn handle_preview(
    catalog: &ExpenseTypeCatalog,
    expense_type: &str,
    distance_km: Option<f64>,
    amount: Option<String>,
) -> ExpenseResult<()> {
    let def = catalog
        .find(expense_type)
        .ok_or_else(|| ExpenseError::expense_type_not_found(expense_type))?;

    let entered = match amount {
        Some(raw) => {
            Money::parse(&raw).map_err(|e| ExpenseError::Validation(e.to_string()))?
        }
        None => Money::zero(),
    };

    let resolution = resolver::resolve(def, distance_km, entered);
    print!("{}", format_resolution(&resolution));

    Ok(())
}
