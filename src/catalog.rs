//! In-memory expense-type catalog
//!
//! The catalog is caller-supplied at form-render time: built from the
//! starter definitions, assembled programmatically, or loaded from a
//! JSON/YAML file. Names are unique case-insensitively.

use std::io::{Read, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{DefaultExpenseType, ExpenseType, ExpenseTypeId, Money};

/// A set of expense types selectable on the entry form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseTypeCatalog {
    types: Vec<ExpenseType>,
}

impl ExpenseTypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with the starter types
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for default in DefaultExpenseType::all() {
            // Starter names never collide
            let _ = catalog.add(default.to_expense_type());
        }
        catalog
    }

    /// Number of types in the catalog
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Add a type, rejecting invalid definitions and duplicate names
    pub fn add(&mut self, expense_type: ExpenseType) -> ExpenseResult<ExpenseTypeId> {
        expense_type
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        if self.find_by_name(&expense_type.name).is_some() {
            return Err(ExpenseError::duplicate_expense_type(&expense_type.name));
        }

        let id = expense_type.id;
        self.types.push(expense_type);
        Ok(id)
    }

    /// Get a type by id
    pub fn get(&self, id: ExpenseTypeId) -> Option<&ExpenseType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Get a type by id, as an error-bearing lookup
    pub fn require(&self, id: ExpenseTypeId) -> ExpenseResult<&ExpenseType> {
        self.get(id)
            .ok_or_else(|| ExpenseError::expense_type_not_found(id.to_string()))
    }

    /// Find a type by exact name, case-insensitively
    pub fn find_by_name(&self, name: &str) -> Option<&ExpenseType> {
        self.types
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Find a type by name or id string
    pub fn find(&self, name_or_id: &str) -> Option<&ExpenseType> {
        if let Some(t) = self.find_by_name(name_or_id) {
            return Some(t);
        }
        if let Ok(id) = ExpenseTypeId::from_str(name_or_id) {
            return self.get(id);
        }
        None
    }

    /// Apply an update to a type by id
    ///
    /// The updated definition is re-validated; a rename may not collide
    /// with another type's name.
    pub fn update<F>(&mut self, id: ExpenseTypeId, f: F) -> ExpenseResult<()>
    where
        F: FnOnce(&mut ExpenseType),
    {
        let idx = self
            .types
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ExpenseError::expense_type_not_found(id.to_string()))?;

        let mut updated = self.types[idx].clone();
        f(&mut updated);
        updated.id = id;
        updated
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let collides = self
            .types
            .iter()
            .any(|t| t.id != id && t.name.eq_ignore_ascii_case(updated.name.trim()));
        if collides {
            return Err(ExpenseError::duplicate_expense_type(&updated.name));
        }

        updated.updated_at = chrono::Utc::now();
        self.types[idx] = updated;
        Ok(())
    }

    /// Remove a type by id, returning it
    pub fn remove(&mut self, id: ExpenseTypeId) -> ExpenseResult<ExpenseType> {
        let idx = self
            .types
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ExpenseError::expense_type_not_found(id.to_string()))?;
        Ok(self.types.remove(idx))
    }

    /// List all types ordered by name
    pub fn list(&self) -> Vec<&ExpenseType> {
        let mut types: Vec<&ExpenseType> = self.types.iter().collect();
        types.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        types
    }

    /// Load a catalog from a JSON reader
    pub fn from_json_reader<R: Read>(reader: R) -> ExpenseResult<Self> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.check_integrity()?;
        Ok(catalog)
    }

    /// Load a catalog from a YAML reader
    pub fn from_yaml_reader<R: Read>(reader: R) -> ExpenseResult<Self> {
        let catalog: Self = serde_yaml::from_reader(reader)?;
        catalog.check_integrity()?;
        Ok(catalog)
    }

    /// Write the catalog as pretty JSON
    pub fn to_json_writer<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    fn check_integrity(&self) -> ExpenseResult<()> {
        for (i, t) in self.types.iter().enumerate() {
            t.validate()
                .map_err(|e| ExpenseError::Catalog(format!("{}: {}", t.name, e)))?;
            let dup = self.types[..i]
                .iter()
                .any(|prev| prev.name.eq_ignore_ascii_case(t.name.trim()));
            if dup {
                return Err(ExpenseError::Catalog(format!(
                    "duplicate expense type name: {}",
                    t.name
                )));
            }
        }
        Ok(())
    }
}

/// Parse a rate argument such as "12", "12.50" or "₹12.50"
pub fn parse_rate(s: &str) -> ExpenseResult<Money> {
    let rate =
        Money::parse(s).map_err(|e| ExpenseError::Validation(e.to_string()))?;
    if rate.is_negative() {
        return Err(ExpenseError::Validation(
            "Rate per kilometer cannot be negative".into(),
        ));
    }
    Ok(rate)
}
