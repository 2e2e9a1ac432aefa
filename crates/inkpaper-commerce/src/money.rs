//! Money type for representing rupee amounts.
//!
//! Catalog prices are whole rupees, so amounts are plain unsigned integers.
//! Arithmetic saturates instead of wrapping so every cart total is defined.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Rupee sign used for display.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

/// A whole-rupee amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Create a new Money value from whole rupees.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Zero rupees.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in whole rupees.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add another amount, returning None on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_mul(&self, quantity: u64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }

    /// Add another amount, clamping at `u64::MAX`.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiply by a quantity, clamping at `u64::MAX`.
    pub fn saturating_mul(&self, quantity: u64) -> Money {
        Money(self.0.saturating_mul(quantity))
    }

    /// Format as a display string with Indian digit grouping (e.g., "₹1,00,000").
    pub fn display(&self) -> String {
        format!("{}{}", RUPEE_SYMBOL, self.display_amount())
    }

    /// Format the amount without the symbol (e.g., "2,960").
    pub fn display_amount(&self) -> String {
        group_indian(self.0)
    }
}

/// Group digits the en-IN way: last three, then pairs.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Mul<u64> for Money {
    type Output = Money;

    fn mul(self, quantity: u64) -> Money {
        self.saturating_mul(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
