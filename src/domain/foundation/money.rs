//! Money value object.
//!
//! All catalog prices are whole currency units. Fractional amounts only
//! appear transiently while a multiplier or discount is applied, and are
//! rounded exactly once back to whole units.
//!
//! Arithmetic saturates at the `i64` bounds, so no catalog content can make
//! a total panic or wrap negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// An amount in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole units.
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units.
    pub fn units(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a factor and rounds the result once.
    ///
    /// Results beyond the `i64` range clamp to its bounds.
    pub fn scale(&self, factor: f64) -> Self {
        Self(round_half_away_from_zero(self.0 as f64 * factor))
    }
}

/// Rounds to the nearest integer, ties away from zero.
///
/// `f64::round` already rounds half-way cases away from zero; this wrapper
/// names the policy so every pricing path applies the same rule.
pub fn round_half_away_from_zero(value: f64) -> i64 {
    value.round() as i64
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
