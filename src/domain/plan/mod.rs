//! Plan and bundle discount aggregation.
//!
//! Flat tier-priced services (no wizard) are collected into a `Plan`, priced
//! against a `PlanCatalog`, and discounted by item count.

mod catalog;
mod discount;
mod item;
#[allow(clippy::module_inception)]
mod plan;

pub use catalog::{PlanCatalog, PlanService, PricedEntry};
pub use discount::{BundleDiscountSchedule, DiscountTier};
pub use item::{AddOnId, PlanItem, PlanServiceId, TierId};
pub use plan::{Plan, PlanTotals};
