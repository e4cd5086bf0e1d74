//! Expense type definitions
//!
//! An expense type is a catalog entry describing how an expense
//! category's form fields and amount behave: whether kilometers are
//! captured and priced at a rate, whether a receipt is mandatory,
//! whether travel endpoints are recorded, and an optional maximum
//! amount cap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseTypeId;
use super::money::Money;

/// A catalog entry describing one category of expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseType {
    /// Unique identifier
    pub id: ExpenseTypeId,

    /// Display name, unique within a catalog
    pub name: String,

    /// Whether the entry form captures kilometers and derives the amount
    #[serde(default)]
    pub requires_distance: bool,

    /// Whether a receipt must be attached
    #[serde(default)]
    pub requires_receipt: bool,

    /// Whether travel origin/destination must be recorded
    #[serde(default)]
    pub requires_travel: bool,

    /// Rate per kilometer, used when `requires_distance` is set
    pub rate_per_km: Option<Money>,

    /// Maximum permitted amount; entries above it are clamped
    pub max_amount: Option<Money>,

    /// When the type was created
    pub created_at: DateTime<Utc>,

    /// When the type was last modified
    pub updated_at: DateTime<Utc>,
}

impl ExpenseType {
    /// Create a new direct-amount expense type
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseTypeId::new(),
            name: name.into(),
            requires_distance: false,
            requires_receipt: false,
            requires_travel: false,
            rate_per_km: None,
            max_amount: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a distance-priced travel type with a per-kilometer rate
    pub fn with_rate(name: impl Into<String>, rate_per_km: Money) -> Self {
        let mut t = Self::new(name);
        t.requires_distance = true;
        t.requires_travel = true;
        t.rate_per_km = Some(rate_per_km);
        t
    }

    /// Require a receipt for this type
    pub fn requiring_receipt(mut self) -> Self {
        self.requires_receipt = true;
        self
    }

    /// Require travel endpoints for this type
    pub fn requiring_travel(mut self) -> Self {
        self.requires_travel = true;
        self
    }

    /// Set the maximum amount cap
    pub fn with_cap(mut self, cap: Money) -> Self {
        self.max_amount = Some(cap);
        self
    }

    /// Update the rate, bumping the modification stamp
    pub fn set_rate(&mut self, rate: Option<Money>) {
        self.rate_per_km = rate;
        self.updated_at = Utc::now();
    }

    /// Update the cap, bumping the modification stamp
    pub fn set_cap(&mut self, cap: Option<Money>) {
        self.max_amount = cap;
        self.updated_at = Utc::now();
    }

    /// Validate the type definition
    pub fn validate(&self) -> Result<(), ExpenseTypeValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseTypeValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(ExpenseTypeValidationError::NameTooLong(self.name.len()));
        }

        if let Some(rate) = self.rate_per_km {
            if rate.is_negative() {
                return Err(ExpenseTypeValidationError::NegativeRate);
            }
        }

        if let Some(cap) = self.max_amount {
            if !cap.is_positive() {
                return Err(ExpenseTypeValidationError::NonPositiveCap);
            }
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The starter expense types every new catalog is seeded with
///
/// These mirror the fixed choices the expense form historically offered
/// before types became configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultExpenseType {
    TravelBike,
    TravelPersonalCar,
    TravelPublic,
    TravelCab,
    Other,
}

impl DefaultExpenseType {
    /// Get all default types in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::TravelBike,
            Self::TravelPersonalCar,
            Self::TravelPublic,
            Self::TravelCab,
            Self::Other,
        ]
    }

    /// Get the name for this default type
    pub fn name(&self) -> &'static str {
        match self {
            Self::TravelBike => "Travel - Bike",
            Self::TravelPersonalCar => "Travel - Personal Car",
            Self::TravelPublic => "Travel - Public Transport",
            Self::TravelCab => "Travel - Cab",
            Self::Other => "Other",
        }
    }

    /// Build the full ExpenseType this default stands for
    pub fn to_expense_type(&self) -> ExpenseType {
        match self {
            Self::TravelBike => ExpenseType::with_rate(self.name(), Money::from_rupees(5)),
            Self::TravelPersonalCar => {
                ExpenseType::with_rate(self.name(), Money::from_rupees(12))
            }
            Self::TravelPublic => ExpenseType::new(self.name()).requiring_travel(),
            Self::TravelCab => ExpenseType::new(self.name())
                .requiring_receipt()
                .requiring_travel(),
            Self::Other => ExpenseType::new(self.name()),
        }
    }
}

/// Validation errors for expense types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseTypeValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeRate,
    NonPositiveCap,
}

impl fmt::Display for ExpenseTypeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense type name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Expense type name too long ({} chars, max 50)", len)
            }
            Self::NegativeRate => write!(f, "Rate per kilometer cannot be negative"),
            Self::NonPositiveCap => write!(f, "Maximum amount cap must be positive"),
        }
    }
}

impl std::error::Error for ExpenseTypeValidationError {}
