//! Amount type for representing signed currency values
//!
//! Amounts are plain floating-point numbers, as entered by the user. The only
//! constraint is finiteness; NaN and infinities never enter the ledger.
//! Sums that would overflow saturate at `±f64::MAX`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::{TallyError, TallyResult};

/// A signed, finite monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting NaN and infinities
    ///
    /// # Examples
    /// ```
    /// use tally::models::Amount;
    /// assert!(Amount::new(12.5).is_ok());
    /// assert!(Amount::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> TallyResult<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(TallyError::Validation(format!(
                "Amount must be a finite number, got {}",
                value
            )))
        }
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Parse an amount from user input
    ///
    /// Accepts an optional sign, a decimal point or a decimal comma, and
    /// surrounding whitespace: "5000", "-12.50", " 3,75 ".
    pub fn parse(s: &str) -> TallyResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TallyError::Validation("Amount is required".into()));
        }

        let normalized = trimmed.replace(',', ".");
        let value: f64 = normalized
            .parse()
            .map_err(|_| TallyError::Validation(format!("Invalid amount: {}", trimmed)))?;

        Self::new(value)
    }

    /// Format with a currency suffix, e.g. "-5000 Ft"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, symbol)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 prints as 0
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{}", value)
    }
}

/// Clamp an overflowed sum of two finite values back into range
fn saturate(value: f64) -> f64 {
    if value.is_infinite() {
        f64::MAX.copysign(value)
    } else {
        value
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(saturate(self.0 + rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(saturate(self.0 - rhs.0))
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("5000").unwrap().value(), 5000.0);
        assert_eq!(Amount::parse("-12.50").unwrap().value(), -12.5);
        assert_eq!(Amount::parse(" 3,75 ").unwrap().value(), 3.75);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("   ").is_err());
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("12.3.4").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(Amount::parse("inf").is_err());
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::parse("5000").unwrap().to_string(), "5000");
        assert_eq!(Amount::parse("-12.5").unwrap().to_string(), "-12.5");
        assert_eq!((-Amount::zero()).to_string(), "0");
    }

    #[test]
    fn test_format_with_symbol() {
        let amount = Amount::new(-5000.0).unwrap();
        assert_eq!(amount.format_with_symbol("Ft"), "-5000 Ft");
        assert_eq!(amount.format_with_symbol(""), "-5000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(100.0).unwrap();
        let b = Amount::new(30.0).unwrap();

        assert_eq!((a + b).value(), 130.0);
        assert_eq!((a - b).value(), 70.0);
        assert_eq!((-a).value(), -100.0);

        let mut c = a;
        c -= b;
        c += b.abs();
        assert_eq!(c.value(), 100.0);
    }

    #[test]
    fn test_overflowing_sums_stay_finite() {
        let big = Amount::new(f64::MAX).unwrap();

        assert_eq!((big + big).value(), f64::MAX);
        assert_eq!((-big - big).value(), -f64::MAX);
        assert_eq!((big + big - (big + big)).value(), 0.0);

        let mut total = Amount::zero();
        for _ in 0..4 {
            total -= Amount::new(1e308).unwrap();
        }
        assert!(total.is_finite());
        assert_eq!(total.value(), -f64::MAX);
    }

    #[test]
    fn test_serializes_as_number() {
        let amount = Amount::new(12.5).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "12.5");
        let back: Amount = serde_json::from_str("5000").unwrap();
        assert_eq!(back.value(), 5000.0);
    }
}
