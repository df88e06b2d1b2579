//! The plan aggregate.

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::{Money, Percentage};

use super::{AddOnId, BundleDiscountSchedule, PlanCatalog, PlanItem, PlanServiceId, TierId};

/// Priced view of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlanTotals {
    pub item_count: usize,
    pub subtotal: Money,
    pub discount: Percentage,
    pub discount_amount: Money,
    pub total: Money,
}

/// A set of flat tier-priced services with a bundle discount.
///
/// # Invariants
///
/// - at most one item per service; adding a service again replaces its tier
/// - `items` keeps insertion order
#[derive(Debug, Clone, Default)]
pub struct Plan {
    items: Vec<PlanItem>,
    schedule: BundleDiscountSchedule,
}

impl Plan {
    /// Creates an empty plan with the default discount schedule.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(schedule: BundleDiscountSchedule) -> Self {
        Self {
            items: Vec::new(),
            schedule,
        }
    }

    /// Adds `service` at `tier`, or switches its tier if already present.
    ///
    /// Switching tiers keeps the item's add-ons and position.
    pub fn add_item(&mut self, service: PlanServiceId, tier: TierId) {
        match self.items.iter_mut().find(|i| i.service_id == service) {
            Some(existing) => {
                debug!(service = %service, tier = %tier, "Replaced plan tier");
                existing.tier_id = tier;
            }
            None => {
                debug!(service = %service, tier = %tier, "Added plan item");
                self.items.push(PlanItem::new(service, tier));
            }
        }
    }

    /// Removes `service`. Returns whether it was present.
    pub fn remove_item(&mut self, service: &PlanServiceId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.service_id != service);
        before != self.items.len()
    }

    /// Toggles `add_on` on an existing item; a no-op when `service` is absent.
    pub fn toggle_add_on(&mut self, service: &PlanServiceId, add_on: AddOnId) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.service_id == service) {
            item.toggle_add_on(add_on);
        }
    }

    pub fn is_service_in_plan(&self, service: &PlanServiceId) -> bool {
        self.item(service).is_some()
    }

    pub fn item(&self, service: &PlanServiceId) -> Option<&PlanItem> {
        self.items.iter().find(|i| &i.service_id == service)
    }

    pub fn items(&self) -> &[PlanItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn schedule(&self) -> &BundleDiscountSchedule {
        &self.schedule
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Prices the plan against `catalog`.
    ///
    /// The discount is applied to the summed subtotal and rounded once.
    pub fn totals(&self, catalog: &PlanCatalog) -> PlanTotals {
        let subtotal: Money = self.items.iter().map(|i| catalog.item_price(i)).sum();
        let discount = self.schedule.discount_for(self.items.len());
        let total = discount.apply_discount(subtotal);

        PlanTotals {
            item_count: self.items.len(),
            subtotal,
            discount,
            discount_amount: subtotal - total,
            total,
        }
    }
}
