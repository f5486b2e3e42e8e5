//! Money type for representing prices.
//!
//! Menu prices are whole rupees, so the amount is a plain unsigned integer.
//! Negative prices are unrepresentable and totals saturate instead of
//! wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency symbol used when rendering amounts.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

/// A non-negative amount in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Raw amount in rupees.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add, clamping at `u64::MAX`.
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiply by a quantity, clamping at `u64::MAX`.
    pub fn saturating_mul(self, factor: u64) -> Money {
        Money(self.0.saturating_mul(factor))
    }

    /// Format as a display string (e.g., "₹420").
    pub fn display(&self) -> String {
        format!("{}{}", RUPEE_SYMBOL, self.0)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Mul<u64> for Money {
    type Output = Money;

    fn mul(self, factor: u64) -> Money {
        self.saturating_mul(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(420).display(), "\u{20b9}420");
        assert_eq!(Money::zero().to_string(), "\u{20b9}0");
    }

    #[test]
    fn test_money_arithmetic() {
        let line = Money::new(150) * 2;
        assert_eq!(line.amount(), 300);
        assert_eq!((line + Money::new(120)).amount(), 420);
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(u64::MAX - 1);
        assert_eq!((big + Money::new(10)).amount(), u64::MAX);
        assert_eq!((big * 3).amount(), u64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [100, 250, 70].into_iter().map(Money::new).sum();
        assert_eq!(total.amount(), 420);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_money_serializes_as_number() {
        let json = serde_json::to_string(&Money::new(199)).unwrap();
        assert_eq!(json, "199");
    }
}
