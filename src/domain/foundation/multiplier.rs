//! Timeline multiplier value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A price multiplier of at least 1.0, carried by timeline options.
///
/// Standard delivery is `1.0`; rush delivery scales the subtotal up.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Multiplier(f64);

impl Multiplier {
    /// No surcharge.
    pub const STANDARD: Self = Self(1.0);

    /// Creates a multiplier, returning error if below 1.0 or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "multiplier",
                "must be a finite number",
            ));
        }
        if value < 1.0 {
            return Err(ValidationError::out_of_range("multiplier", 1.0, "inf", value));
        }
        Ok(Self(value))
    }

    /// Returns the raw factor.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if this multiplier adds a surcharge.
    pub fn is_rush(&self) -> bool {
        self.0 > 1.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Multiplier> for f64 {
    fn from(value: Multiplier) -> Self {
        value.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_and_above() {
        assert!(Multiplier::try_new(1.0).is_ok());
        assert!(Multiplier::try_new(1.5).is_ok());
        assert!(Multiplier::try_new(2.0).is_ok());
    }

    #[test]
    fn rejects_below_one() {
        assert!(matches!(
            Multiplier::try_new(0.9),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Multiplier::try_new(f64::NAN).is_err());
        assert!(Multiplier::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(Multiplier::default(), Multiplier::STANDARD);
        assert!(!Multiplier::STANDARD.is_rush());
        assert!(Multiplier::try_new(1.25).unwrap().is_rush());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Multiplier = serde_json::from_str("1.5").unwrap();
        assert_eq!(ok.value(), 1.5);
        assert!(serde_json::from_str::<Multiplier>("0.5").is_err());
    }
}
