//! Service schemas: the ordered dimensions and wizard steps of one service.

use crate::domain::foundation::ServiceType;
use crate::domain::recommendation::PresetTable;

use super::{CatalogOption, Dimension, DimensionId, DimensionRole, OptionId};

/// One data-entry page of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStepDefinition {
    pub title: String,
    pub dimensions: Vec<DimensionId>,
}

/// Everything the builder needs to know about a service's configuration axes.
///
/// # Invariants
///
/// - Dimension ids are unique
/// - Every single-select dimension has a default present among its options
/// - At most one dimension has the `Timeline` role
/// - Every dimension belongs to exactly one step
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSchema {
    service: ServiceType,
    dimensions: Vec<Dimension>,
    steps: Vec<WizardStepDefinition>,
}

impl ServiceSchema {
    pub(crate) fn new(
        service: ServiceType,
        dimensions: Vec<Dimension>,
        steps: Vec<WizardStepDefinition>,
    ) -> Self {
        Self {
            service,
            dimensions,
            steps,
        }
    }

    pub fn service(&self) -> ServiceType {
        self.service
    }

    /// Dimensions in catalog order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension(&self, id: &DimensionId) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.id() == id)
    }

    pub fn dimensions_with_role(&self, role: DimensionRole) -> impl Iterator<Item = &Dimension> {
        self.dimensions.iter().filter(move |d| d.role() == role)
    }

    pub fn timeline(&self) -> Option<&Dimension> {
        self.dimensions_with_role(DimensionRole::Timeline).next()
    }

    /// Read-only option lookup.
    ///
    /// A miss is not an error: callers treat it as "no price contribution,
    /// not a custom quote".
    pub fn option(&self, dimension: &DimensionId, option: &OptionId) -> Option<&CatalogOption> {
        self.dimension(dimension).and_then(|d| d.option(option))
    }

    /// Number of data-entry steps. The summary is step `step_count() + 1`.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[WizardStepDefinition] {
        &self.steps
    }

    /// Returns the definition of a 1-based step, `None` for the summary or beyond.
    pub fn step(&self, number: usize) -> Option<&WizardStepDefinition> {
        number.checked_sub(1).and_then(|idx| self.steps.get(idx))
    }
}

/// A service schema together with its recommendation presets.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCatalog {
    schema: ServiceSchema,
    presets: PresetTable,
}

impl ServiceCatalog {
    pub(crate) fn new(schema: ServiceSchema, presets: PresetTable) -> Self {
        Self { schema, presets }
    }

    pub fn service(&self) -> ServiceType {
        self.schema.service()
    }

    pub fn schema(&self) -> &ServiceSchema {
        &self.schema
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::catalog::{CatalogRegistry, DimensionId, DimensionRole, OptionId};
    use crate::domain::foundation::ServiceType;

    #[test]
    fn video_schema_exposes_steps_in_order() {
        let registry = CatalogRegistry::embedded().unwrap();
        let schema = registry.catalog(ServiceType::Video).schema();

        assert_eq!(schema.step_count(), 5);
        assert_eq!(schema.step(1).unwrap().dimensions[0], DimensionId::new("duration"));
        assert!(schema.step(0).is_none());
        assert!(schema.step(6).is_none());
    }

    #[test]
    fn option_lookup_tolerates_unknown_ids() {
        let registry = CatalogRegistry::embedded().unwrap();
        let schema = registry.catalog(ServiceType::Video).schema();

        assert!(schema
            .option(&DimensionId::new("style"), &OptionId::new("modern"))
            .is_some());
        assert!(schema
            .option(&DimensionId::new("style"), &OptionId::new("vaporwave"))
            .is_none());
        assert!(schema
            .option(&DimensionId::new("colour"), &OptionId::new("modern"))
            .is_none());
    }

    #[test]
    fn every_schema_has_one_timeline() {
        let registry = CatalogRegistry::embedded().unwrap();
        for service in ServiceType::all() {
            let schema = registry.catalog(*service).schema();
            assert_eq!(
                schema.dimensions_with_role(DimensionRole::Timeline).count(),
                1,
                "{} should have one timeline",
                service
            );
        }
    }
}
