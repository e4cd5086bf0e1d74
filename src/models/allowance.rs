//! Daily allowance models
//!
//! Daily allowances are paid per working day on a project, at a flat
//! tier rate or an hourly country rate for assignments abroad.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{EmployeeId, ProjectId};
use super::money::Money;

/// Flat daily-allowance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowanceTier {
    Local,
    Domestic,
    International,
}

impl fmt::Display for AllowanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "Local"),
            Self::Domestic => write!(f, "Domestic"),
            Self::International => write!(f, "International"),
        }
    }
}

/// Flat per-day rates for each allowance tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceRates {
    pub local: Money,
    pub domestic: Money,
    pub international: Money,
}

impl AllowanceRates {
    /// Get the per-day rate for a tier
    pub fn rate_for(&self, tier: AllowanceTier) -> Money {
        match tier {
            AllowanceTier::Local => self.local,
            AllowanceTier::Domestic => self.domestic,
            AllowanceTier::International => self.international,
        }
    }
}

impl Default for AllowanceRates {
    fn default() -> Self {
        Self {
            local: Money::from_rupees(150),
            domestic: Money::from_rupees(350),
            international: Money::from_rupees(800),
        }
    }
}

/// Hourly allowance rate for a country, with a separate overtime rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDaRate {
    pub country: String,
    pub currency: String,
    pub per_hour: Money,
    pub extra_hour: Money,
}

impl CountryDaRate {
    pub fn new(
        country: impl Into<String>,
        currency: impl Into<String>,
        per_hour: Money,
        extra_hour: Money,
    ) -> Self {
        Self {
            country: country.into(),
            currency: currency.into(),
            per_hour,
            extra_hour,
        }
    }

    /// Compute the allowance for a day split into regular and extra hours
    ///
    /// Negative or non-finite hour counts contribute nothing.
    pub fn amount_for(&self, regular_hours: f64, extra_hours: f64) -> Money {
        let clamp = |h: f64| if h.is_finite() && h > 0.0 { h } else { 0.0 };
        self.per_hour.times(clamp(regular_hours)) + self.extra_hour.times(clamp(extra_hours))
    }
}

impl fmt::Display for CountryDaRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.country, self.currency)
    }
}

/// One day's allowance for an employee on a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAllowance {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub date: NaiveDate,
    pub amount: Money,
    pub currency: String,

    /// Whether the day ran past regular hours
    #[serde(default)]
    pub is_extended: bool,

    /// Whether the allowance has been approved for payout
    #[serde(default)]
    pub approved: bool,

    pub created_at: DateTime<Utc>,
}

impl DailyAllowance {
    /// Create an unapproved allowance entry
    pub fn new(
        employee_id: EmployeeId,
        project_id: ProjectId,
        date: NaiveDate,
        amount: Money,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            employee_id,
            project_id,
            date,
            amount,
            currency: currency.into(),
            is_extended: false,
            approved: false,
            created_at: Utc::now(),
        }
    }

    /// Create an allowance at a flat tier rate
    pub fn at_tier(
        employee_id: EmployeeId,
        project_id: ProjectId,
        date: NaiveDate,
        rates: &AllowanceRates,
        tier: AllowanceTier,
    ) -> Self {
        Self::new(employee_id, project_id, date, rates.rate_for(tier), "INR")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tier_rates() {
        let rates = AllowanceRates::default();
        assert_eq!(rates.rate_for(AllowanceTier::Local), Money::from_rupees(150));
        assert_eq!(
            rates.rate_for(AllowanceTier::Domestic),
            Money::from_rupees(350)
        );
        assert_eq!(
            rates.rate_for(AllowanceTier::International),
            Money::from_rupees(800)
        );
    }

    #[test]
    fn test_country_rate_amount() {
        let rate = CountryDaRate::new(
            "Germany",
            "EUR",
            Money::from_rupees(20),
            Money::from_rupees(30),
        );

        // 8 regular hours, 2 extra hours
        assert_eq!(rate.amount_for(8.0, 2.0), Money::from_rupees(220));
        // No extra hours
        assert_eq!(rate.amount_for(8.0, 0.0), Money::from_rupees(160));
        // Garbage hours contribute nothing
        assert_eq!(rate.amount_for(-3.0, f64::NAN), Money::zero());
    }

    #[test]
    fn test_allowance_at_tier() {
        let da = DailyAllowance::at_tier(
            EmployeeId::new(),
            ProjectId::new(),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            &AllowanceRates::default(),
            AllowanceTier::Domestic,
        );
        assert_eq!(da.amount, Money::from_rupees(350));
        assert_eq!(da.currency, "INR");
        assert!(!da.approved);
    }
}
