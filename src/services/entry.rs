//! Expense entry service
//!
//! Recomputes and validates a single entry against its catalog type:
//! distance required (and amount derived) for distance-priced types,
//! receipt and travel endpoints required when flagged, amount required
//! for direct-entry types, cap enforced last.

use std::fmt;

use crate::catalog::ExpenseTypeCatalog;
use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::resolver::{self, FormField, Resolution};

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: FormField,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of resolving an entry: the recomputed amount plus any
/// field-level issues, collected rather than first-error-only
#[derive(Debug, Clone)]
pub struct EntryCheck {
    pub resolution: Resolution,
    pub issues: Vec<FieldIssue>,
}

impl EntryCheck {
    /// Whether the entry is ready for submission
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Service resolving entries against a caller-supplied catalog
pub struct EntryService<'a> {
    catalog: &'a ExpenseTypeCatalog,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(catalog: &'a ExpenseTypeCatalog) -> Self {
        Self { catalog }
    }

    /// Recompute the entry's amount and collect validation issues
    ///
    /// The entry's amount is rewritten with the resolved value, so a
    /// distance-priced entry always satisfies the derivation invariant
    /// and a capped entry never exceeds its cap.
    pub fn resolve(&self, expense: &mut Expense) -> ExpenseResult<EntryCheck> {
        let def = self.catalog.require(expense.expense_type_id)?;
        let resolution = resolver::resolve(def, expense.distance_km, expense.amount);

        let mut issues = Vec::new();

        if def.requires_distance {
            let missing = !matches!(expense.distance_km, Some(km) if km.is_finite() && km > 0.0);
            if missing {
                issues.push(FieldIssue {
                    field: FormField::Distance,
                    message: format!("Kilometers required for {}", def.name),
                });
            }
        } else if expense.amount.is_zero() {
            issues.push(FieldIssue {
                field: FormField::Amount,
                message: "Amount required".into(),
            });
        }

        if def.requires_receipt && !expense.receipt_attached {
            issues.push(FieldIssue {
                field: FormField::Receipt,
                message: format!("Receipt required for {}", def.name),
            });
        }

        if def.requires_travel {
            let blank = |v: &Option<String>| {
                v.as_deref().map(str::trim).unwrap_or("").is_empty()
            };
            if blank(&expense.travel_from) {
                issues.push(FieldIssue {
                    field: FormField::TravelFrom,
                    message: format!("Travel origin required for {}", def.name),
                });
            }
            if blank(&expense.travel_to) {
                issues.push(FieldIssue {
                    field: FormField::TravelTo,
                    message: format!("Travel destination required for {}", def.name),
                });
            }
        }

        expense.amount = resolution.amount;
        expense.touch();

        Ok(EntryCheck { resolution, issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeId, ExpenseType, ExpenseTypeId, Money, ProjectId};
    use chrono::NaiveDate;

    struct Seed {
        bike: ExpenseTypeId,
        cab: ExpenseTypeId,
        other: ExpenseTypeId,
    }

    fn setup() -> (ExpenseTypeCatalog, Seed) {
        let mut catalog = ExpenseTypeCatalog::new();
        let bike = catalog
            .add(ExpenseType::with_rate("Travel - Bike", Money::from_rupees(5)))
            .unwrap();
        let cab = catalog
            .add(
                ExpenseType::new("Travel - Cab")
                    .requiring_receipt()
                    .requiring_travel()
                    .with_cap(Money::from_rupees(1000)),
            )
            .unwrap();
        let other = catalog.add(ExpenseType::new("Other")).unwrap();
        (catalog, Seed { bike, cab, other })
    }

    fn entry(type_id: ExpenseTypeId) -> Expense {
        Expense::new(
            type_id,
            EmployeeId::new(),
            ProjectId::new(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
    }

    #[test]
    fn test_distance_entry_derives_amount() {
        let (catalog, seed) = setup();
        let service = EntryService::new(&catalog);

        let mut e = entry(seed.bike)
            .with_distance(14.0)
            .with_travel("Office", "Client site");
        let check = service.resolve(&mut e).unwrap();

        assert!(check.is_ok());
        assert_eq!(e.amount, Money::from_rupees(70));
    }

    #[test]
    fn test_distance_entry_missing_km() {
        let (catalog, seed) = setup();
        let service = EntryService::new(&catalog);

        let mut e = entry(seed.bike).with_travel("A", "B");
        let check = service.resolve(&mut e).unwrap();

        assert!(!check.is_ok());
        assert_eq!(check.issues.len(), 1);
        assert_eq!(check.issues[0].field, FormField::Distance);
        assert_eq!(e.amount, Money::zero());
    }

    #[test]
    fn test_cab_collects_all_issues() {
        let (catalog, seed) = setup();
        let service = EntryService::new(&catalog);

        let mut e = entry(seed.cab);
        let check = service.resolve(&mut e).unwrap();

        let fields: Vec<FormField> = check.issues.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                FormField::Amount,
                FormField::Receipt,
                FormField::TravelFrom,
                FormField::TravelTo
            ]
        );
    }

    #[test]
    fn test_cap_clamps_entered_amount() {
        let (catalog, seed) = setup();
        let service = EntryService::new(&catalog);

        let mut e = entry(seed.cab)
            .with_amount(Money::from_rupees(1400))
            .with_receipt()
            .with_travel("Airport", "Hotel");
        let check = service.resolve(&mut e).unwrap();

        assert!(check.is_ok());
        assert!(check.resolution.cap_notice.is_some());
        assert_eq!(e.amount, Money::from_rupees(1000));
    }

    #[test]
    fn test_direct_entry_requires_amount() {
        let (catalog, seed) = setup();
        let service = EntryService::new(&catalog);

        let mut e = entry(seed.other);
        let check = service.resolve(&mut e).unwrap();
        assert_eq!(check.issues.len(), 1);
        assert_eq!(check.issues[0].field, FormField::Amount);

        let mut ok = entry(seed.other).with_amount(Money::from_rupees(80));
        assert!(service.resolve(&mut ok).unwrap().is_ok());
    }

    #[test]
    fn test_unknown_type_is_error() {
        let (catalog, _) = setup();
        let service = EntryService::new(&catalog);

        let mut e = entry(ExpenseTypeId::new());
        assert!(service.resolve(&mut e).unwrap_err().is_not_found());
    }

    #[test]
    fn test_blank_travel_endpoints_flagged() {
        let (catalog, seed) = setup();
        let service = EntryService::new(&catalog);

        let mut e = entry(seed.cab)
            .with_amount(Money::from_rupees(100))
            .with_receipt()
            .with_travel("  ", "Hotel");
        let check = service.resolve(&mut e).unwrap();
        assert_eq!(check.issues.len(), 1);
        assert_eq!(check.issues[0].field, FormField::TravelFrom);
    }
}
