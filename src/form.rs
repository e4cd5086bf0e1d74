//! Expense form adapter
//!
//! Bridges user-input events to the resolver for a UI layer that owns
//! the actual widgets. Handlers are registered explicitly; there is no
//! document-scoped wiring. Every event recomputes the derived amount
//! and field set synchronously, so the most recent input always wins.

use std::collections::BTreeSet;

use crate::catalog::ExpenseTypeCatalog;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseTypeId, Money};
use crate::resolver::{self, CapNotice, FormField};

/// Snapshot pushed to registered handlers after every event
#[derive(Debug, Clone)]
pub struct FormUpdate {
    /// Fields that must be visible/required for the selected type
    pub fields: BTreeSet<FormField>,
    /// Current amount, derived or entered, after cap clamping
    pub amount: Money,
    /// Set when the amount was clamped on this event
    pub cap_notice: Option<CapNotice>,
}

/// UI-adapter holding the in-flight entry input
///
/// The form borrows the caller's catalog; selecting a type that is not
/// in it is an error, matching a select box restricted to catalog
/// options.
pub struct ExpenseForm<'a> {
    catalog: &'a ExpenseTypeCatalog,
    selected: Option<ExpenseTypeId>,
    distance_km: Option<f64>,
    amount: Money,
    listeners: Vec<Box<dyn FnMut(&FormUpdate) + 'a>>,
}

impl<'a> ExpenseForm<'a> {
    /// Create a form over a catalog, with nothing selected
    pub fn new(catalog: &'a ExpenseTypeCatalog) -> Self {
        Self {
            catalog,
            selected: None,
            distance_km: None,
            amount: Money::zero(),
            listeners: Vec::new(),
        }
    }

    /// Register a handler invoked after every input event
    pub fn on_update<F>(&mut self, handler: F)
    where
        F: FnMut(&FormUpdate) + 'a,
    {
        self.listeners.push(Box::new(handler));
    }

    /// The currently selected type, if any
    pub fn selected(&self) -> Option<ExpenseTypeId> {
        self.selected
    }

    /// The current amount after the last event
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The current distance input
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Select an expense type from the catalog
    pub fn select_type(&mut self, id: ExpenseTypeId) -> ExpenseResult<FormUpdate> {
        self.catalog.require(id)?;
        self.selected = Some(id);
        Ok(self.recompute())
    }

    /// Update the distance input; `None` clears it
    pub fn set_distance(&mut self, km: Option<f64>) -> ExpenseResult<FormUpdate> {
        self.require_selection()?;
        self.distance_km = km;
        Ok(self.recompute())
    }

    /// Update the directly-entered amount
    ///
    /// Ignored for distance-priced types, where the derivation governs.
    pub fn set_amount(&mut self, amount: Money) -> ExpenseResult<FormUpdate> {
        self.require_selection()?;
        self.amount = amount;
        Ok(self.recompute())
    }

    /// Current state without mutating anything, for initial rendering
    pub fn snapshot(&self) -> ExpenseResult<FormUpdate> {
        let id = self.require_selection()?;
        // require_selection guarantees presence
        let def = self.catalog.require(id)?;
        let res = resolver::resolve(def, self.distance_km, self.amount);
        Ok(FormUpdate {
            fields: res.fields,
            amount: res.amount,
            cap_notice: res.cap_notice,
        })
    }

    fn require_selection(&self) -> ExpenseResult<ExpenseTypeId> {
        self.selected
            .ok_or_else(|| ExpenseError::Validation("No expense type selected".into()))
    }

    fn recompute(&mut self) -> FormUpdate {
        let update = match self.snapshot() {
            Ok(u) => u,
            // recompute is only reached with a valid selection
            Err(_) => FormUpdate {
                fields: BTreeSet::new(),
                amount: self.amount,
                cap_notice: None,
            },
        };

        self.amount = update.amount;
        for listener in &mut self.listeners {
            listener(&update);
        }
        update
    }
}
