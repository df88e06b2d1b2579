//! Bundle discount tiers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};

/// A discount that applies once a plan holds at least `min_items` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub min_items: usize,
    pub percentage: Percentage,
}

impl DiscountTier {
    pub const fn new(min_items: usize, percentage: Percentage) -> Self {
        Self {
            min_items,
            percentage,
        }
    }
}

/// Ordered discount tiers keyed by item count.
///
/// # Invariants
///
/// - `min_items` is at least 1 and strictly increasing
/// - `percentage` never decreases from one tier to the next
///
/// Together these make the discount monotonic: adding an item can never
/// lower it.
///
/// # Default Schedule
///
/// | Items | Discount |
/// |-------|----------|
/// | 0-2 | 0% |
/// | 3-4 | 10% |
/// | 5-6 | 15% |
/// | 7+ | 20% |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleDiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl BundleDiscountSchedule {
    /// Validates and builds a schedule.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` when a tier starts at zero items,
    /// does not start after the previous tier, or lowers the discount.
    pub fn try_new(tiers: Vec<DiscountTier>) -> Result<Self, ValidationError> {
        let mut previous: Option<&DiscountTier> = None;
        for tier in &tiers {
            if tier.min_items == 0 {
                return Err(ValidationError::out_of_range("min_items", 1, usize::MAX, 0));
            }
            if let Some(prev) = previous {
                if tier.min_items <= prev.min_items {
                    return Err(ValidationError::out_of_range(
                        "min_items",
                        prev.min_items + 1,
                        usize::MAX,
                        tier.min_items,
                    ));
                }
                if tier.percentage < prev.percentage {
                    return Err(ValidationError::out_of_range(
                        "percentage",
                        prev.percentage.value(),
                        100,
                        tier.percentage.value(),
                    ));
                }
            }
            previous = Some(tier);
        }
        Ok(Self { tiers })
    }

    /// Discount for a plan holding `item_count` items.
    ///
    /// Tier boundaries are inclusive at the lower bound.
    pub fn discount_for(&self, item_count: usize) -> Percentage {
        self.tiers
            .iter()
            .rev()
            .find(|tier| item_count >= tier.min_items)
            .map(|tier| tier.percentage)
            .unwrap_or(Percentage::ZERO)
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }
}

impl Default for BundleDiscountSchedule {
    fn default() -> Self {
        Self {
            tiers: vec![
                DiscountTier::new(3, Percentage::new(10)),
                DiscountTier::new(5, Percentage::new(15)),
                DiscountTier::new(7, Percentage::new(20)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tier(min_items: usize, pct: u8) -> DiscountTier {
        DiscountTier::new(min_items, Percentage::new(pct))
    }

    #[test]
    fn default_schedule_matches_published_table() {
        let schedule = BundleDiscountSchedule::default();
        let discounts: Vec<u8> = (0..=8).map(|n| schedule.discount_for(n).value()).collect();
        assert_eq!(discounts, vec![0, 0, 0, 10, 10, 15, 15, 20, 20]);
    }

    #[test]
    fn default_schedule_passes_validation() {
        let tiers = BundleDiscountSchedule::default().tiers().to_vec();
        assert!(BundleDiscountSchedule::try_new(tiers).is_ok());
    }

    #[test]
    fn empty_schedule_never_discounts() {
        let schedule = BundleDiscountSchedule::try_new(vec![]).unwrap();
        assert_eq!(schedule.discount_for(100), Percentage::ZERO);
    }

    #[test]
    fn rejects_non_increasing_min_items() {
        let result = BundleDiscountSchedule::try_new(vec![tier(3, 10), tier(3, 15)]);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn rejects_decreasing_percentage() {
        let result = BundleDiscountSchedule::try_new(vec![tier(3, 15), tier(5, 10)]);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn rejects_zero_min_items() {
        let result = BundleDiscountSchedule::try_new(vec![tier(0, 5)]);
        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    proptest! {
        #[test]
        fn discount_never_decreases_as_items_grow(count in 0usize..200) {
            let schedule = BundleDiscountSchedule::default();
            prop_assert!(schedule.discount_for(count + 1) >= schedule.discount_for(count));
        }

        #[test]
        fn any_valid_schedule_is_monotonic(
            steps in proptest::collection::vec((1usize..5, 0u8..10), 0..6),
            count in 0usize..40,
        ) {
            let mut min_items = 0;
            let mut pct = 0u8;
            let tiers: Vec<_> = steps
                .into_iter()
                .map(|(gap, bump)| {
                    min_items += gap;
                    pct = (pct + bump).min(100);
                    tier(min_items, pct)
                })
                .collect();
            let schedule = BundleDiscountSchedule::try_new(tiers).unwrap();
            prop_assert!(schedule.discount_for(count + 1) >= schedule.discount_for(count));
        }
    }
}
