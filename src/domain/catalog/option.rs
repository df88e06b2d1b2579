//! Catalog options and their charges.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{string_id, Money, Multiplier};

string_id!(
    /// Identifier of an option, unique within its dimension.
    OptionId
);

/// What a priced option costs.
///
/// `RequiresQuote` replaces a missing price: the option is valid to select
/// but has no fixed amount, so the builder must flag a custom quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Price {
    Fixed(Money),
    RequiresQuote,
}

impl Price {
    /// Amount this price adds to a subtotal. Custom-quote prices add nothing.
    pub fn contribution(&self) -> Money {
        match self {
            Price::Fixed(amount) => *amount,
            Price::RequiresQuote => Money::ZERO,
        }
    }

    /// Returns true if the price must be quoted by hand.
    pub fn requires_quote(&self) -> bool {
        matches!(self, Price::RequiresQuote)
    }
}

/// How an option affects the quote: an additive price, or a multiplier on
/// the whole subtotal (timeline options only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionCharge {
    Price(Price),
    Multiplier(Multiplier),
}

/// One selectable choice within a dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOption {
    id: OptionId,
    label: String,
    charge: OptionCharge,
    included_by_default: bool,
    starts_at: bool,
}

impl CatalogOption {
    pub(crate) fn new(
        id: OptionId,
        label: String,
        charge: OptionCharge,
        included_by_default: bool,
        starts_at: bool,
    ) -> Self {
        Self {
            id,
            label,
            charge,
            included_by_default,
            starts_at,
        }
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn charge(&self) -> OptionCharge {
        self.charge
    }

    /// Returns true if the option is part of the base package.
    pub fn is_included_by_default(&self) -> bool {
        self.included_by_default
    }

    /// Returns true if the listed price is a floor rather than exact.
    ///
    /// Informational only; the listed amount is still what gets summed.
    pub fn is_starting_price(&self) -> bool {
        self.starts_at
    }

    /// Effective price of the option, or `None` for multiplier options.
    ///
    /// Options included by default always cost zero.
    pub fn price(&self) -> Option<Price> {
        match self.charge {
            OptionCharge::Price(_) if self.included_by_default => Some(Price::Fixed(Money::ZERO)),
            OptionCharge::Price(price) => Some(price),
            OptionCharge::Multiplier(_) => None,
        }
    }

    /// Timeline multiplier of the option, or `None` for priced options.
    pub fn multiplier(&self) -> Option<Multiplier> {
        match self.charge {
            OptionCharge::Multiplier(m) => Some(m),
            OptionCharge::Price(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(units: i64, included: bool) -> CatalogOption {
        CatalogOption::new(
            OptionId::new("opt"),
            "Option".to_string(),
            OptionCharge::Price(Price::Fixed(Money::from_units(units))),
            included,
            false,
        )
    }

    #[test]
    fn fixed_price_contributes_its_amount() {
        assert_eq!(Price::Fixed(Money::from_units(175)).contribution(), Money::from_units(175));
    }

    #[test]
    fn custom_quote_contributes_nothing() {
        assert_eq!(Price::RequiresQuote.contribution(), Money::ZERO);
        assert!(Price::RequiresQuote.requires_quote());
    }

    #[test]
    fn included_options_are_free() {
        assert_eq!(priced(120, true).price(), Some(Price::Fixed(Money::ZERO)));
        assert_eq!(priced(120, false).price(), Some(Price::Fixed(Money::from_units(120))));
    }

    #[test]
    fn multiplier_options_have_no_price() {
        let rush = CatalogOption::new(
            OptionId::new("rush"),
            "Rush".to_string(),
            OptionCharge::Multiplier(Multiplier::try_new(1.5).unwrap()),
            false,
            false,
        );
        assert_eq!(rush.price(), None);
        assert_eq!(rush.multiplier().map(|m| m.value()), Some(1.5));
    }

    #[test]
    fn price_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Price::Fixed(Money::from_units(100))).unwrap();
        assert_eq!(json, r#"{"kind":"fixed","amount":100}"#);
        let json = serde_json::to_string(&Price::RequiresQuote).unwrap();
        assert_eq!(json, r#"{"kind":"requires_quote"}"#);
    }
}
