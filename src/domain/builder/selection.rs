//! Resolved per-dimension selections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::catalog::{Dimension, DimensionRole, OptionId, Price};
use crate::domain::foundation::{Money, Multiplier};

/// What is selected in one dimension, with its price already resolved.
///
/// Prices are resolved when the selection is made, not when totals are read.
/// An id the catalog does not know resolves to a zero contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    /// Primary or deliverable dimension.
    Single { option: OptionId, price: Price },
    /// Timeline dimension.
    Timeline {
        option: OptionId,
        multiplier: Multiplier,
    },
    /// Add-on dimension.
    Multi {
        options: BTreeSet<OptionId>,
        total: Money,
    },
}

impl Selection {
    /// Resolves a single choice against its dimension.
    ///
    /// Timeline dimensions produce `Timeline`, everything else `Single`.
    /// Callers never pass add-on dimensions here.
    pub(crate) fn resolve_single(dimension: &Dimension, option: OptionId) -> Self {
        let found = dimension.option(&option);
        if dimension.role() == DimensionRole::Timeline {
            let multiplier = found
                .and_then(|o| o.multiplier())
                .unwrap_or(Multiplier::STANDARD);
            Selection::Timeline { option, multiplier }
        } else {
            let price = found
                .and_then(|o| o.price())
                .unwrap_or(Price::Fixed(Money::ZERO));
            Selection::Single { option, price }
        }
    }

    /// Resolves an add-on set by summing the catalog price of each member.
    pub(crate) fn resolve_multi(dimension: &Dimension, options: BTreeSet<OptionId>) -> Self {
        let total = options
            .iter()
            .filter_map(|id| dimension.option(id))
            .filter_map(|o| o.price())
            .map(|p| p.contribution())
            .sum();
        Selection::Multi { options, total }
    }

    /// Returns the selected option of a single-choice dimension.
    pub fn option(&self) -> Option<&OptionId> {
        match self {
            Selection::Single { option, .. } | Selection::Timeline { option, .. } => Some(option),
            Selection::Multi { .. } => None,
        }
    }

    /// Returns the selected add-on ids; empty for single-choice dimensions.
    pub fn add_ons(&self) -> BTreeSet<OptionId> {
        match self {
            Selection::Multi { options, .. } => options.clone(),
            _ => BTreeSet::new(),
        }
    }

    /// Whether `id` is part of this selection.
    pub fn contains(&self, id: &OptionId) -> bool {
        match self {
            Selection::Multi { options, .. } => options.contains(id),
            _ => self.option() == Some(id),
        }
    }
}
