//! Expense amount resolution
//!
//! Pure functions mapping an expense-type definition and the current
//! input to the derived amount, the cap-clamped amount, and the set of
//! form fields that must be visible/required. No hidden state: every
//! function is a function of its arguments only.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseType, Money};

/// The form fields an expense type can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormField {
    /// Kilometers input, shown instead of the amount for distance types
    Distance,
    /// Direct amount input
    Amount,
    /// Receipt attachment
    Receipt,
    /// Travel origin
    TravelFrom,
    /// Travel destination
    TravelTo,
}

impl FormField {
    /// Stable identifier for UI wiring
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Amount => "amount",
            Self::Receipt => "receipt",
            Self::TravelFrom => "travel-from",
            Self::TravelTo => "travel-to",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of applying the maximum-amount cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapCheck {
    /// The amount after clamping
    pub amount: Money,
    /// Whether the input exceeded the cap and was clamped
    pub was_clamped: bool,
}

/// Derive the amount for a distance-priced expense
///
/// Multiplies distance by the type's per-kilometer rate, rounded to the
/// nearest paisa. A missing rate, or a missing/invalid distance, yields
/// zero. For types without `requires_distance` the derivation does not
/// apply and zero is returned; the entered amount governs there.
pub fn compute_amount(def: &ExpenseType, distance_km: Option<f64>) -> Money {
    if !def.requires_distance {
        return Money::zero();
    }

    let rate = match def.rate_per_km {
        Some(r) => r,
        None => return Money::zero(),
    };

    match distance_km {
        Some(km) if km.is_finite() && km > 0.0 => rate.times(km),
        _ => Money::zero(),
    }
}

/// Clamp an amount to the type's maximum cap, if one is set
///
/// A cap violation is not an error: the amount is corrected and the
/// clamp reported so the caller can phrase a notice.
pub fn enforce_cap(def: &ExpenseType, amount: Money) -> CapCheck {
    match def.max_amount {
        Some(cap) if amount > cap => CapCheck {
            amount: cap,
            was_clamped: true,
        },
        _ => CapCheck {
            amount,
            was_clamped: false,
        },
    }
}

/// The set of fields that must be shown/required for a type
///
/// Distance types capture kilometers and hide the direct amount input;
/// every other type captures the amount directly.
pub fn required_fields(def: &ExpenseType) -> BTreeSet<FormField> {
    let mut fields = BTreeSet::new();

    if def.requires_distance {
        fields.insert(FormField::Distance);
    } else {
        fields.insert(FormField::Amount);
    }

    if def.requires_receipt {
        fields.insert(FormField::Receipt);
    }

    if def.requires_travel {
        fields.insert(FormField::TravelFrom);
        fields.insert(FormField::TravelTo);
    }

    fields
}

/// One-shot resolution of a type + input into everything the UI needs
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Final amount, after derivation and cap clamping
    pub amount: Money,
    /// Set when the amount was clamped to the type's cap
    pub cap_notice: Option<CapNotice>,
    /// Fields that must be visible/required for the selected type
    pub fields: BTreeSet<FormField>,
}

/// Data for a user-visible cap notice; wording is the caller's concern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapNotice {
    pub cap: Money,
}

/// Resolve a type against the current input in one pass
///
/// For distance types the amount is derived from `distance_km` and
/// `entered_amount` is ignored; otherwise `entered_amount` is taken as
/// is. The cap applies to whichever amount results.
pub fn resolve(def: &ExpenseType, distance_km: Option<f64>, entered_amount: Money) -> Resolution {
    let base = if def.requires_distance {
        compute_amount(def, distance_km)
    } else {
        entered_amount
    };

    let check = enforce_cap(def, base);
    Resolution {
        amount: check.amount,
        cap_notice: check.was_clamped.then(|| CapNotice {
            cap: check.amount,
        }),
        fields: required_fields(def),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseType;

    fn bike() -> ExpenseType {
        ExpenseType::with_rate("Travel - Bike", Money::from_rupees(5))
    }

    fn cab() -> ExpenseType {
        ExpenseType::new("Travel - Cab")
            .requiring_receipt()
            .requiring_travel()
    }

    #[test]
    fn test_compute_amount_multiplies_and_rounds() {
        // ₹2.00/km × 5 km = ₹10.00
        let def = ExpenseType::with_rate("Travel - Bike", Money::from_rupees(2));
        assert_eq!(compute_amount(&def, Some(5.0)), Money::from_rupees(10));

        // ₹12.00/km × 7.25 km = ₹87.00
        let car = ExpenseType::with_rate("Travel - Personal Car", Money::from_rupees(12));
        assert_eq!(compute_amount(&car, Some(7.25)), Money::from_paise(8700));

        // ₹5.00/km × 1.333 km = ₹6.665 -> ₹6.67
        assert_eq!(compute_amount(&bike(), Some(1.333)), Money::from_paise(667));
    }

    #[test]
    fn test_compute_amount_is_idempotent() {
        let def = bike();
        let first = compute_amount(&def, Some(12.5));
        let second = compute_amount(&def, Some(12.5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_or_invalid_distance_is_zero() {
        let def = bike();
        assert_eq!(compute_amount(&def, None), Money::zero());
        assert_eq!(compute_amount(&def, Some(f64::NAN)), Money::zero());
        assert_eq!(compute_amount(&def, Some(-4.0)), Money::zero());
    }

    #[test]
    fn test_missing_rate_is_zero() {
        let mut def = bike();
        def.rate_per_km = None;
        assert_eq!(compute_amount(&def, Some(10.0)), Money::zero());
    }

    #[test]
    fn test_non_distance_type_does_not_derive() {
        assert_eq!(compute_amount(&cab(), Some(10.0)), Money::zero());
    }

    #[test]
    fn test_enforce_cap_clamps_over_limit() {
        let def = ExpenseType::new("Other").with_cap(Money::from_rupees(100));
        let check = enforce_cap(&def, Money::from_rupees(150));
        assert_eq!(check.amount, Money::from_rupees(100));
        assert!(check.was_clamped);
    }

    #[test]
    fn test_enforce_cap_passes_under_limit() {
        let def = ExpenseType::new("Other").with_cap(Money::from_rupees(100));
        let check = enforce_cap(&def, Money::from_rupees(100));
        assert_eq!(check.amount, Money::from_rupees(100));
        assert!(!check.was_clamped);
    }

    #[test]
    fn test_enforce_cap_without_cap() {
        let def = ExpenseType::new("Other");
        let check = enforce_cap(&def, Money::from_rupees(150));
        assert_eq!(check.amount, Money::from_rupees(150));
        assert!(!check.was_clamped);
    }

    #[test]
    fn test_required_fields_distance_type() {
        let fields = required_fields(&bike());
        assert!(fields.contains(&FormField::Distance));
        assert!(!fields.contains(&FormField::Amount));
        assert!(fields.contains(&FormField::TravelFrom));
        assert!(fields.contains(&FormField::TravelTo));
    }

    #[test]
    fn test_required_fields_travel_endpoints() {
        let def = ExpenseType::new("Site Visit").requiring_travel();
        let fields = required_fields(&def);
        assert!(fields.contains(&FormField::TravelFrom));
        assert!(fields.contains(&FormField::TravelTo));
        assert!(fields.contains(&FormField::Amount));
    }

    #[test]
    fn test_required_fields_plain_type() {
        let fields = required_fields(&ExpenseType::new("Other"));
        assert_eq!(fields.len(), 1);
        assert!(fields.contains(&FormField::Amount));
    }

    #[test]
    fn test_required_fields_deterministic() {
        assert_eq!(required_fields(&cab()), required_fields(&cab()));
    }

    #[test]
    fn test_resolve_distance_type_ignores_entered_amount() {
        let res = resolve(&bike(), Some(10.0), Money::from_rupees(999));
        assert_eq!(res.amount, Money::from_rupees(50));
        assert!(res.cap_notice.is_none());
    }

    #[test]
    fn test_resolve_applies_cap_with_notice() {
        let def = ExpenseType::with_rate("Travel - Personal Car", Money::from_rupees(12))
            .with_cap(Money::from_rupees(100));
        let res = resolve(&def, Some(20.0), Money::zero());
        assert_eq!(res.amount, Money::from_rupees(100));
        assert_eq!(
            res.cap_notice,
            Some(CapNotice {
                cap: Money::from_rupees(100)
            })
        );
    }

    #[test]
    fn test_resolve_direct_amount_type() {
        let res = resolve(&cab(), None, Money::from_rupees(320));
        assert_eq!(res.amount, Money::from_rupees(320));
        assert!(res.fields.contains(&FormField::Receipt));
        assert!(res.fields.contains(&FormField::Amount));
    }
}
