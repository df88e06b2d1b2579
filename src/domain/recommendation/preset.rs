//! Recommendation presets and the per-service lookup table.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::catalog::{DimensionId, OptionId};

use super::CategoryKey;

/// Default option bundle for one category.
///
/// `selections` holds one option per primary dimension; `add_ons` holds
/// the ids to pre-check in each add-on dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationPreset {
    selections: BTreeMap<DimensionId, OptionId>,
    add_ons: BTreeMap<DimensionId, BTreeSet<OptionId>>,
}

impl RecommendationPreset {
    pub(crate) fn new(
        selections: BTreeMap<DimensionId, OptionId>,
        add_ons: BTreeMap<DimensionId, BTreeSet<OptionId>>,
    ) -> Self {
        Self { selections, add_ons }
    }

    /// Primary-dimension selections, keyed by dimension.
    pub fn selections(&self) -> &BTreeMap<DimensionId, OptionId> {
        &self.selections
    }

    /// Add-on ids to union into each add-on dimension.
    pub fn add_ons(&self) -> &BTreeMap<DimensionId, BTreeSet<OptionId>> {
        &self.add_ons
    }
}

/// Pure lookup table from category to preset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresetTable {
    presets: BTreeMap<CategoryKey, RecommendationPreset>,
}

impl PresetTable {
    pub(crate) fn new(presets: BTreeMap<CategoryKey, RecommendationPreset>) -> Self {
        Self { presets }
    }

    /// Returns the preset for a category, if one exists.
    ///
    /// A miss is not an error; the builder keeps its current selections.
    pub fn resolve(&self, category: &CategoryKey) -> Option<&RecommendationPreset> {
        self.presets.get(category)
    }

    /// Categories with a preset, in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryKey> {
        self.presets.keys()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> CategoryKey {
        CategoryKey::try_new(s).unwrap()
    }

    fn table() -> PresetTable {
        let mut selections = BTreeMap::new();
        selections.insert(DimensionId::new("pages"), OptionId::new("1-5"));
        let mut add_ons = BTreeMap::new();
        add_ons.insert(
            DimensionId::new("features"),
            [OptionId::new("analytics")].into_iter().collect(),
        );

        let mut presets = BTreeMap::new();
        presets.insert(key("portfolio"), RecommendationPreset::new(selections, add_ons));
        PresetTable::new(presets)
    }

    #[test]
    fn resolve_finds_known_category() {
        let table = table();
        let preset = table.resolve(&key("portfolio")).unwrap();
        assert_eq!(
            preset.selections().get(&DimensionId::new("pages")),
            Some(&OptionId::new("1-5"))
        );
        assert!(preset.add_ons()[&DimensionId::new("features")].contains(&OptionId::new("analytics")));
    }

    #[test]
    fn resolve_misses_unknown_category() {
        assert!(table().resolve(&key("blog")).is_none());
    }

    #[test]
    fn resolve_is_case_insensitive_through_key() {
        assert!(table().resolve(&key("PORTFOLIO")).is_some());
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let table = PresetTable::default();
        assert!(table.is_empty());
        assert!(table.resolve(&key("anything")).is_none());
    }
}
