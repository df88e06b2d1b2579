//! Dimensions: named, ordered lists of mutually exclusive options.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::string_id;

use super::{CatalogOption, OptionId};

string_id!(
    /// Identifier of a dimension within a service schema.
    DimensionId
);

/// The part a dimension plays in pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionRole {
    /// Core scope choice. Targeted by recommendation presets.
    Primary,
    /// Optional extras, multi-select, summed.
    AddOn,
    /// Formats, license or source files. Single-select, additive.
    Deliverable,
    /// Delivery speed. Single-select, contributes a multiplier.
    Timeline,
}

impl DimensionRole {
    /// Returns true if exactly one option is selected at a time.
    pub fn is_single_select(&self) -> bool {
        !matches!(self, DimensionRole::AddOn)
    }

    /// Returns true if a selected null price flags a custom quote.
    pub fn can_require_quote(&self) -> bool {
        matches!(self, DimensionRole::Primary | DimensionRole::Deliverable)
    }
}

/// A named catalog of options plus its default.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    id: DimensionId,
    label: String,
    role: DimensionRole,
    options: Vec<CatalogOption>,
    default: Option<OptionId>,
}

impl Dimension {
    pub(crate) fn new(
        id: DimensionId,
        label: String,
        role: DimensionRole,
        options: Vec<CatalogOption>,
        default: Option<OptionId>,
    ) -> Self {
        Self {
            id,
            label,
            role,
            options,
            default,
        }
    }

    pub fn id(&self) -> &DimensionId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> DimensionRole {
        self.role
    }

    /// Options in catalog order.
    pub fn options(&self) -> &[CatalogOption] {
        &self.options
    }

    /// Looks up an option by id.
    pub fn option(&self, id: &OptionId) -> Option<&CatalogOption> {
        self.options.iter().find(|o| o.id() == id)
    }

    /// The option selected when the builder is created or reset.
    ///
    /// Always present for single-select dimensions of a loaded catalog.
    pub fn default_option(&self) -> Option<&CatalogOption> {
        self.default.as_ref().and_then(|id| self.option(id))
    }

    /// Add-on ids that start checked: every option included by default.
    pub fn default_add_ons(&self) -> BTreeSet<OptionId> {
        self.options
            .iter()
            .filter(|o| o.is_included_by_default())
            .map(|o| o.id().clone())
            .collect()
    }
}
