//! Percentage value object (0-100 scale), used for bundle discounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Money, ValidationError};

/// A whole percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range("percentage", 0, 100, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Applies this percentage as a discount, rounding once.
    ///
    /// Returns the amount payable after the discount.
    pub fn apply_discount(&self, amount: Money) -> Money {
        amount.scale(1.0 - self.as_fraction())
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(15).value(), 15);
        assert_eq!(Percentage::new(101).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, "101");
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn apply_discount_rounds_once() {
        let fifteen = Percentage::new(15);
        assert_eq!(fifteen.apply_discount(Money::from_units(1000)), Money::from_units(850));

        // 333 * 0.9 = 299.7
        let ten = Percentage::new(10);
        assert_eq!(ten.apply_discount(Money::from_units(333)), Money::from_units(300));
    }

    #[test]
    fn zero_discount_keeps_amount() {
        assert_eq!(Percentage::ZERO.apply_discount(Money::from_units(427)), Money::from_units(427));
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(20)), "20%");
    }

    #[test]
    fn percentage_deserialization_validates() {
        let pct: Percentage = serde_json::from_str("10").unwrap();
        assert_eq!(pct.value(), 10);
        assert!(serde_json::from_str::<Percentage>("120").is_err());
    }
}
