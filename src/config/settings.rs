//! User-facing settings
//!
//! Settings are plain data supplied by the caller (or a settings file
//! passed to the CLI); nothing is persisted by this crate.

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::ExpenseResult;
use crate::models::AllowanceRates;
use crate::services::grace::DEFAULT_GRACE_DAYS;

/// Settings for the expense desk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Global backdating window in days
    #[serde(default = "default_grace_days")]
    pub grace_days: u32,

    /// Flat daily-allowance tier rates
    #[serde(default)]
    pub allowance_rates: AllowanceRates,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_grace_days() -> u32 {
    DEFAULT_GRACE_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            grace_days: default_grace_days(),
            allowance_rates: AllowanceRates::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON reader; missing fields take defaults
    pub fn from_json_reader<R: Read>(reader: R) -> ExpenseResult<Self> {
        let settings: Self = serde_json::from_reader(reader)?;
        Ok(settings)
    }
}
