//! Money Module
//!
//! Fixed-point representation for every balance and transfer amount.
//! Binary floating point never touches a balance.
//!
//! ## Internal Representation
//! - Amounts are stored as `u64` minor units ("cents")
//! - The scale factor is `10^MONEY_DECIMALS` (= 100)
//! - Negative amounts cannot be represented, so a `Money` balance is
//!   non-negative by construction
//!
//! ## Usage
//! ```rust
//! use pin_ledger::money::Money;
//!
//! let amount: Money = "20.50".parse().unwrap();
//! assert_eq!(amount.minor_units(), 2050);
//! assert_eq!(amount.to_string(), "20.50");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core_types::MONEY_DECIMALS;

// ============================================================================
// Error Types
// ============================================================================

/// Money conversion errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Amount cannot be negative")]
    Negative,

    #[error("Amount too large, would overflow")]
    Overflow,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

// ============================================================================
// Money
// ============================================================================

/// Non-negative amount in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    #[inline(always)]
    pub const fn from_minor_units(units: u64) -> Self {
        Self(units)
    }

    #[inline(always)]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `None` on u64 overflow.
    #[inline(always)]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns `None` if the result would be negative.
    #[inline(always)]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Convert a client-facing decimal into minor units.
    ///
    /// # Errors
    /// * `Negative` - value is below zero
    /// * `PrecisionOverflow` - more than `MONEY_DECIMALS` significant decimals
    ///   (no silent truncation)
    /// * `Overflow` - value does not fit in u64 minor units
    pub fn from_decimal(value: Decimal) -> Result<Self, MoneyError> {
        if value < Decimal::ZERO {
            return Err(MoneyError::Negative);
        }

        let normalized = value.normalize();
        if normalized.scale() > MONEY_DECIMALS {
            return Err(MoneyError::PrecisionOverflow {
                provided: normalized.scale(),
                max: MONEY_DECIMALS,
            });
        }

        let multiplier = Decimal::from(10u64.pow(MONEY_DECIMALS));
        normalized
            .checked_mul(multiplier)
            .and_then(|scaled| scaled.to_u64())
            .map(Money)
            .ok_or(MoneyError::Overflow)
    }

    /// Lossless conversion back to a decimal with `MONEY_DECIMALS` scale.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), MONEY_DECIMALS)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Strict parse: rejects `.5`, `5.`, signs and scientific notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::InvalidFormat("empty string".into()));
        }
        if s.starts_with('-') {
            return Err(MoneyError::Negative);
        }
        if s.starts_with('+') {
            return Err(MoneyError::InvalidFormat("explicit sign not allowed".into()));
        }
        if s.starts_with('.') {
            return Err(MoneyError::InvalidFormat(
                "missing leading zero (e.g., use 0.5 instead of .5)".into(),
            ));
        }
        if s.ends_with('.') {
            return Err(MoneyError::InvalidFormat(
                "missing fractional part (e.g., use 5.0 instead of 5.)".into(),
            ));
        }
        if !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyError::InvalidFormat(format!("invalid character in {}", s)));
        }

        let value =
            Decimal::from_str(s).map_err(|e| MoneyError::InvalidFormat(e.to_string()))?;
        Self::from_decimal(value)
    }
}

// ============================================================================
// Serde: serialize as string, accept string or number
// ============================================================================

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // String preserves the two-decimal form
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum DecimalOrString {
            String(String),
            Number(Decimal),
        }

        match DecimalOrString::deserialize(deserializer)? {
            DecimalOrString::String(s) => s.parse().map_err(D::Error::custom),
            DecimalOrString::Number(d) => Money::from_decimal(d).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_whole_and_fraction() {
        assert_eq!(
            Money::from_decimal(Decimal::new(10000, 0)).unwrap(),
            Money::from_minor_units(1_000_000)
        );
        assert_eq!(
            Money::from_decimal(Decimal::new(2050, 2)).unwrap(),
            Money::from_minor_units(2050)
        );
        // Trailing zeros beyond the scale are not precision
        assert_eq!(
            Money::from_decimal(Decimal::new(15000, 4)).unwrap(),
            Money::from_minor_units(150)
        );
    }

    #[test]
    fn test_from_decimal_rejects_negative() {
        assert_eq!(
            Money::from_decimal(Decimal::new(-5, 0)),
            Err(MoneyError::Negative)
        );
    }

    #[test]
    fn test_from_decimal_rejects_sub_cent() {
        assert_eq!(
            Money::from_decimal(Decimal::new(1001, 3)),
            Err(MoneyError::PrecisionOverflow {
                provided: 3,
                max: 2
            })
        );
    }

    #[test]
    fn test_from_decimal_overflow() {
        let too_big = Decimal::from(u64::MAX);
        assert_eq!(Money::from_decimal(too_big), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_display_always_two_decimals() {
        assert_eq!(Money::from_minor_units(800_000).to_string(), "8000.00");
        assert_eq!(Money::from_minor_units(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_parse_strict_format() {
        assert_eq!("100".parse::<Money>().unwrap().minor_units(), 10_000);
        assert_eq!("0.5".parse::<Money>().unwrap().minor_units(), 50);
        assert!(matches!(
            ".5".parse::<Money>(),
            Err(MoneyError::InvalidFormat(_))
        ));
        assert!(matches!(
            "5.".parse::<Money>(),
            Err(MoneyError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1e5".parse::<Money>(),
            Err(MoneyError::InvalidFormat(_))
        ));
        assert_eq!("-1".parse::<Money>(), Err(MoneyError::Negative));
        assert!(matches!(
            "".parse::<Money>(),
            Err(MoneyError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_minor_units(100);
        let b = Money::from_minor_units(30);
        assert_eq!(a.checked_sub(b), Some(Money::from_minor_units(70)));
        assert_eq!(b.checked_sub(a), None);
        assert_eq!(Money::from_minor_units(u64::MAX).checked_add(b), None);
    }

    #[test]
    fn test_serde_string_and_number() {
        let from_str: Money = serde_json::from_str("\"10000.00\"").unwrap();
        let from_num: Money = serde_json::from_str("5000").unwrap();
        assert_eq!(from_str.minor_units(), 1_000_000);
        assert_eq!(from_num.minor_units(), 500_000);
        assert_eq!(serde_json::to_string(&from_str).unwrap(), "\"10000.00\"");
        assert!(serde_json::from_str::<Money>("\"-1\"").is_err());
    }
}
