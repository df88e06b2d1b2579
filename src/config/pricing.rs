//! Pricing configuration

use serde::Deserialize;

use crate::domain::foundation::Percentage;
use crate::domain::plan::{BundleDiscountSchedule, DiscountTier};

use super::error::ValidationError;

/// One bundle discount tier as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BundleDiscountConfig {
    pub min_items: usize,
    pub percentage: u8,
}

/// Pricing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Bundle discount tiers, ascending by `min_items`
    #[serde(default = "default_bundle_discounts")]
    pub bundle_discounts: Vec<BundleDiscountConfig>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            bundle_discounts: default_bundle_discounts(),
        }
    }
}

fn default_bundle_discounts() -> Vec<BundleDiscountConfig> {
    BundleDiscountSchedule::default()
        .tiers()
        .iter()
        .map(|tier| BundleDiscountConfig {
            min_items: tier.min_items,
            percentage: tier.percentage.value(),
        })
        .collect()
}

impl PricingConfig {
    /// Build the validated discount schedule
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBundleDiscount` for percentages above
    /// 100 or tiers that are not monotonic.
    pub fn schedule(&self) -> Result<BundleDiscountSchedule, ValidationError> {
        let tiers = self
            .bundle_discounts
            .iter()
            .map(|tier| {
                Percentage::try_new(tier.percentage)
                    .map(|pct| DiscountTier::new(tier.min_items, pct))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ValidationError::InvalidBundleDiscount(e.to_string()))?;

        BundleDiscountSchedule::try_new(tiers)
            .map_err(|e| ValidationError::InvalidBundleDiscount(e.to_string()))
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.schedule().map(|_| ())
    }
}
