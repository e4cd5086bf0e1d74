//! Money type for representing currency amounts
//!
//! Internally stores amounts in paise (i64) to avoid floating-point
//! precision issues. Provides safe arithmetic operations, rate scaling
//! for distance-derived amounts, and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as paise (hundredths of a rupee)
///
/// Using i64 paise keeps two-decimal rounding exact and supports any
/// amount an expense sheet will ever see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from paise
    ///
    /// # Examples
    /// ```
    /// use expense_desk::models::Money;
    /// let amount = Money::from_paise(1050); // ₹10.50
    /// ```
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Create a Money amount from whole rupees
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in paise
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Get the whole rupees portion (truncated toward zero)
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Get the paise portion (0-99)
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Scale by a factor, rounding to the nearest paisa (half away from zero)
    ///
    /// Used for distance-derived amounts: `rate.times(kilometers)`.
    /// Non-finite factors scale to zero.
    pub fn times(&self, factor: f64) -> Self {
        if !factor.is_finite() {
            return Self::zero();
        }
        Self((self.0 as f64 * factor).round() as i64)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "₹10.50", "Rs 10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency markers if present
        let s = s
            .strip_prefix('₹')
            .or_else(|| s.strip_prefix("Rs."))
            .or_else(|| s.strip_prefix("Rs"))
            .unwrap_or(s)
            .trim_start();

        // Parse based on format
        let paise = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let rupees: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate paise to 2 digits
            let paise_str = parts[1];
            let paise: i64 = match paise_str.len() {
                0 => 0,
                1 => {
                    paise_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => paise_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            rupees * 100 + paise
        } else {
            // Integer format - assume whole rupees
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -paise } else { paise }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.rupees().abs(),
                self.paise_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.rupees(), self.paise_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-₹{}.{:02}", self.rupees().abs(), self.paise_part())
        } else {
            write!(f, "₹{}.{:02}", self.rupees(), self.paise_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
