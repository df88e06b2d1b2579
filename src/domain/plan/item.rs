//! Plan items and their identifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::string_id;

string_id!(
    /// Identifier of a flat tier-priced service, e.g. `seo`.
    PlanServiceId
);

string_id!(
    /// Identifier of a tier within a plan service, e.g. `starter`.
    TierId
);

string_id!(
    /// Identifier of an add-on within a plan service.
    AddOnId
);

/// One service in a plan: its chosen tier and any selected add-ons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub service_id: PlanServiceId,
    pub tier_id: TierId,
    #[serde(default)]
    pub add_on_ids: BTreeSet<AddOnId>,
}

impl PlanItem {
    pub fn new(service_id: PlanServiceId, tier_id: TierId) -> Self {
        Self {
            service_id,
            tier_id,
            add_on_ids: BTreeSet::new(),
        }
    }

    /// Adds `add_on` if absent, removes it if present.
    pub fn toggle_add_on(&mut self, add_on: AddOnId) {
        if !self.add_on_ids.remove(&add_on) {
            self.add_on_ids.insert(add_on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_has_no_add_ons() {
        let item = PlanItem::new(PlanServiceId::new("seo"), TierId::new("starter"));
        assert!(item.add_on_ids.is_empty());
    }

    #[test]
    fn toggle_add_on_flips_membership() {
        let mut item = PlanItem::new(PlanServiceId::new("seo"), TierId::new("starter"));
        item.toggle_add_on(AddOnId::new("audit"));
        assert!(item.add_on_ids.contains(&AddOnId::new("audit")));
        item.toggle_add_on(AddOnId::new("audit"));
        assert!(item.add_on_ids.is_empty());
    }
}
