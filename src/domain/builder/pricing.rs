//! Pricing computation.
//!
//! Totals are always recomputed in full from the current selections. Nothing
//! is tracked incrementally, so derived totals cannot drift from what is
//! selected.
//!
//! Rounding happens exactly once: `total = round(subtotal * multiplier)` with
//! round-half-away-from-zero, and the rush fee is the difference between
//! `total` and `subtotal`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::{DimensionId, DimensionRole, ServiceSchema};
use crate::domain::foundation::{Money, Multiplier};

use super::Selection;

/// Derived totals of a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub subtotal: Money,
    pub rush_fee: Money,
    pub total: Money,
    /// True when any primary or deliverable selection has no fixed price.
    /// `total` is then a lower bound, not a payable amount.
    pub has_custom_quote: bool,
}

impl QuoteTotals {
    /// Applies the timeline multiplier to a subtotal.
    ///
    /// The rush fee is derived from the rounded total rather than rounded on
    /// its own, so `subtotal + rush_fee == total` holds by construction.
    pub fn from_subtotal(subtotal: Money, multiplier: Multiplier, has_custom_quote: bool) -> Self {
        let total = subtotal.scale(multiplier.value());
        Self {
            subtotal,
            rush_fee: total - subtotal,
            total,
            has_custom_quote,
        }
    }

    /// Whether `total` can be presented as the final price.
    pub fn is_final(&self) -> bool {
        !self.has_custom_quote
    }
}

/// Folds resolved selections into totals.
///
/// Dimensions are visited in schema order. A dimension with no selection, or
/// a selection whose shape does not match the dimension's role, contributes
/// nothing.
pub fn compute_totals(
    schema: &ServiceSchema,
    selections: &BTreeMap<DimensionId, Selection>,
    multiplier: Multiplier,
) -> QuoteTotals {
    let mut subtotal = Money::ZERO;
    let mut has_custom_quote = false;

    for dimension in schema.dimensions() {
        let Some(selection) = selections.get(dimension.id()) else {
            continue;
        };

        match (dimension.role(), selection) {
            (DimensionRole::Primary | DimensionRole::Deliverable, Selection::Single { price, .. }) => {
                has_custom_quote |= price.requires_quote();
                subtotal += price.contribution();
            }
            (DimensionRole::AddOn, Selection::Multi { total, .. }) => {
                subtotal += *total;
            }
            _ => {}
        }
    }

    QuoteTotals::from_subtotal(subtotal, multiplier, has_custom_quote)
}
