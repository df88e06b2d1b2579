//! The quote builder state machine.
//!
//! One parametric builder serves every service type. Its behavior is driven
//! entirely by the `ServiceSchema` of the catalog it was created with.
//!
//! # Design Decisions
//!
//! - **Always priceable**: every dimension starts at its catalog default and
//!   totals are recomputed after every mutation
//! - **Tolerant setters**: unknown dimensions, unknown options and setters
//!   applied to the wrong kind of dimension degrade to no-ops or zero
//!   contributions and are logged, never returned as errors
//! - **Explicit persistence**: the store only changes on `save_to` and `reset`

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::catalog::{
    Dimension, DimensionId, DimensionRole, OptionId, ServiceCatalog, ServiceSchema,
    WizardStepDefinition,
};
use crate::domain::foundation::{Multiplier, ServiceType};
use crate::domain::recommendation::CategoryKey;
use crate::ports::QuoteStore;

use super::{compute_totals, BuilderSnapshot, CustomerInfo, QuoteTotals, Selection, WizardStep};

/// Live builder for one service type.
///
/// # Invariants
///
/// - every schema dimension has exactly one `Selection`
/// - `totals` always equals `compute_totals` over the current selections
/// - `timeline_multiplier` is the multiplier of the selected timeline option
/// - `current_step` lies in `1..=step_count + 1`
#[derive(Debug, Clone)]
pub struct QuoteBuilder {
    catalog: Arc<ServiceCatalog>,
    current_step: WizardStep,
    category: Option<CategoryKey>,
    selections: BTreeMap<DimensionId, Selection>,
    timeline_multiplier: Multiplier,
    totals: QuoteTotals,
    customer: CustomerInfo,
}

impl QuoteBuilder {
    /// Creates a builder seeded with the catalog defaults.
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        let selections = default_selections(catalog.schema());
        let mut builder = Self {
            catalog,
            current_step: WizardStep::FIRST,
            category: None,
            selections,
            timeline_multiplier: Multiplier::STANDARD,
            totals: QuoteTotals::default(),
            customer: CustomerInfo::default(),
        };
        builder.recompute();
        builder
    }

    /// Creates a builder restored from `snapshot`.
    ///
    /// Selections are re-resolved against `catalog`, as in `load_from`.
    pub fn from_snapshot(catalog: Arc<ServiceCatalog>, snapshot: BuilderSnapshot) -> Self {
        let mut builder = Self::new(catalog);
        if snapshot.service != builder.service() {
            warn!(expected = %builder.service(), found = %snapshot.service, "Snapshot belongs to another service");
        }
        builder.restore(snapshot);
        builder
    }

    pub fn service(&self) -> ServiceType {
        self.catalog.service()
    }

    pub fn catalog(&self) -> &Arc<ServiceCatalog> {
        &self.catalog
    }

    fn schema(&self) -> &ServiceSchema {
        self.catalog.schema()
    }

    pub fn step_count(&self) -> usize {
        self.schema().step_count()
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn is_at_summary(&self) -> bool {
        self.current_step.is_summary(self.step_count())
    }

    /// Definition of the current step, or `None` on the summary.
    pub fn current_step_definition(&self) -> Option<&WizardStepDefinition> {
        self.schema().step(self.current_step.value())
    }

    pub fn category(&self) -> Option<&CategoryKey> {
        self.category.as_ref()
    }

    pub fn selection(&self, dimension: &DimensionId) -> Option<&Selection> {
        self.selections.get(dimension)
    }

    pub fn selections(&self) -> &BTreeMap<DimensionId, Selection> {
        &self.selections
    }

    pub fn timeline_multiplier(&self) -> Multiplier {
        self.timeline_multiplier
    }

    pub fn totals(&self) -> QuoteTotals {
        self.totals
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Advances one step; a no-op on the summary.
    pub fn next(&mut self) -> WizardStep {
        self.current_step = self.current_step.next(self.step_count());
        self.current_step
    }

    /// Goes back one step; a no-op on the first step.
    pub fn prev(&mut self) -> WizardStep {
        self.current_step = self.current_step.prev(self.step_count());
        self.current_step
    }

    /// Jumps directly to `step`, clamped into the wizard.
    ///
    /// Earlier steps are not required to be visited first.
    pub fn go_to(&mut self, step: usize) -> WizardStep {
        self.current_step = WizardStep::clamped(step, self.step_count());
        self.current_step
    }

    // ------------------------------------------------------------------
    // Selections
    // ------------------------------------------------------------------

    /// Selects `option` in a single-choice dimension.
    ///
    /// An option the catalog does not know is recorded with a zero
    /// contribution. Add-on dimensions are left untouched; use
    /// `toggle_add_on` for those.
    pub fn select(&mut self, dimension: &DimensionId, option: &OptionId) {
        let Some(found) = self.schema().dimension(dimension) else {
            warn!(service = %self.service(), dimension = %dimension, "Select on unknown dimension ignored");
            return;
        };
        if found.role() == DimensionRole::AddOn {
            warn!(service = %self.service(), dimension = %dimension, "Select on add-on dimension ignored");
            return;
        }
        if found.option(option).is_none() {
            warn!(service = %self.service(), dimension = %dimension, option = %option, "Unknown option contributes nothing");
        }

        let selection = Selection::resolve_single(found, option.clone());
        self.selections.insert(dimension.clone(), selection);
        self.recompute();
    }

    /// Flips membership of `option` in an add-on dimension.
    pub fn toggle_add_on(&mut self, dimension: &DimensionId, option: &OptionId) {
        let Some(found) = self.schema().dimension(dimension) else {
            warn!(service = %self.service(), dimension = %dimension, "Toggle on unknown dimension ignored");
            return;
        };
        if found.role() != DimensionRole::AddOn {
            warn!(service = %self.service(), dimension = %dimension, "Toggle on single-choice dimension ignored");
            return;
        }
        if found.option(option).is_none() {
            warn!(service = %self.service(), dimension = %dimension, option = %option, "Unknown add-on contributes nothing");
        }

        let mut options = self
            .selections
            .get(dimension)
            .map(Selection::add_ons)
            .unwrap_or_default();
        if !options.remove(option) {
            options.insert(option.clone());
        }

        let selection = Selection::resolve_multi(found, options);
        self.selections.insert(dimension.clone(), selection);
        self.recompute();
    }

    /// Records the declared category and applies its preset.
    pub fn set_category(&mut self, category: &CategoryKey) -> bool {
        self.category = Some(category.clone());
        self.apply_recommendations(category)
    }

    /// Applies the preset for `category`, if one exists.
    ///
    /// Primary selections named by the preset are overwritten and its
    /// add-ons are added to the current ones. The timeline is never touched.
    /// Returns `false` and leaves every selection as it was when the
    /// category has no preset.
    pub fn apply_recommendations(&mut self, category: &CategoryKey) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let Some(preset) = catalog.presets().resolve(category) else {
            debug!(service = %self.service(), category = %category, "No preset for category");
            return false;
        };
        let schema = catalog.schema();

        for (dimension_id, option) in preset.selections() {
            if let Some(dimension) = schema.dimension(dimension_id) {
                self.selections.insert(
                    dimension_id.clone(),
                    Selection::resolve_single(dimension, option.clone()),
                );
            }
        }

        for (dimension_id, add_ons) in preset.add_ons() {
            if let Some(dimension) = schema.dimension(dimension_id) {
                let mut options = self
                    .selections
                    .get(dimension_id)
                    .map(Selection::add_ons)
                    .unwrap_or_default();
                options.extend(add_ons.iter().cloned());
                self.selections.insert(
                    dimension_id.clone(),
                    Selection::resolve_multi(dimension, options),
                );
            }
        }

        info!(service = %self.service(), category = %category, "Applied recommendation preset");
        self.recompute();
        true
    }

    pub fn set_customer_info(&mut self, customer: CustomerInfo) {
        self.customer = customer.normalized();
    }

    /// Whether any selected option is priced as a "starting at" floor.
    pub fn has_starting_prices(&self) -> bool {
        let schema = self.schema();
        self.selections.iter().any(|(dimension_id, selection)| {
            schema.dimension(dimension_id).is_some_and(|dimension| {
                dimension
                    .options()
                    .iter()
                    .any(|o| o.is_starting_price() && selection.contains(o.id()))
            })
        })
    }

    // ------------------------------------------------------------------
    // Snapshots and the quote store
    // ------------------------------------------------------------------

    /// Copies the current state into a detached snapshot.
    pub fn snapshot(&self) -> BuilderSnapshot {
        BuilderSnapshot {
            service: self.service(),
            current_step: self.current_step,
            category: self.category.clone(),
            selections: self.selections.clone(),
            timeline_multiplier: self.timeline_multiplier,
            totals: self.totals,
            customer: self.customer.clone(),
        }
    }

    /// Saves the current snapshot, replacing any earlier one for this service.
    pub fn save_to(&self, store: &mut dyn QuoteStore) {
        store.save_service_config(self.service(), self.snapshot());
        info!(service = %self.service(), total = %self.totals.total, "Saved builder to quote store");
    }

    /// Restores the snapshot saved for this service.
    ///
    /// Selections are re-resolved against the catalog and totals recomputed,
    /// so the restored builder never carries stale prices. Returns `false`
    /// when nothing was saved.
    pub fn load_from(&mut self, store: &dyn QuoteStore) -> bool {
        let Some(snapshot) = store.service_config(self.service()) else {
            return false;
        };
        let snapshot = snapshot.clone();
        self.restore(snapshot);
        true
    }

    fn restore(&mut self, snapshot: BuilderSnapshot) {
        let mut selections = default_selections(self.schema());
        for dimension in self.schema().dimensions() {
            let Some(saved) = snapshot.selections.get(dimension.id()) else {
                continue;
            };
            let restored = match (dimension.role(), saved.option()) {
                (DimensionRole::AddOn, _) => Selection::resolve_multi(dimension, saved.add_ons()),
                (_, Some(option)) => Selection::resolve_single(dimension, option.clone()),
                (_, None) => continue,
            };
            selections.insert(dimension.id().clone(), restored);
        }

        self.current_step = WizardStep::clamped(snapshot.current_step.value(), self.step_count());
        self.category = snapshot.category;
        self.selections = selections;
        self.customer = snapshot.customer;
        self.recompute();
        debug!(service = %self.service(), step = %self.current_step, "Restored builder from snapshot");
    }

    /// Returns to catalog defaults and removes this service from the store.
    pub fn reset(&mut self, store: &mut dyn QuoteStore) {
        self.current_step = WizardStep::FIRST;
        self.category = None;
        self.selections = default_selections(self.schema());
        self.customer = CustomerInfo::default();
        self.recompute();
        store.clear_service_config(self.service());
        info!(service = %self.service(), "Reset builder");
    }

    fn recompute(&mut self) {
        self.timeline_multiplier = self
            .schema()
            .timeline()
            .and_then(|timeline| self.selections.get(timeline.id()))
            .and_then(|selection| match selection {
                Selection::Timeline { multiplier, .. } => Some(*multiplier),
                _ => None,
            })
            .unwrap_or(Multiplier::STANDARD);

        self.totals = compute_totals(self.schema(), &self.selections, self.timeline_multiplier);
        debug!(
            service = %self.service(),
            subtotal = %self.totals.subtotal,
            rush_fee = %self.totals.rush_fee,
            total = %self.totals.total,
            has_custom_quote = self.totals.has_custom_quote,
            "Recomputed totals"
        );
    }
}

fn default_selections(schema: &ServiceSchema) -> BTreeMap<DimensionId, Selection> {
    schema
        .dimensions()
        .iter()
        .filter_map(|dimension| default_selection(dimension).map(|s| (dimension.id().clone(), s)))
        .collect()
}

fn default_selection(dimension: &Dimension) -> Option<Selection> {
    if dimension.role() == DimensionRole::AddOn {
        return Some(Selection::resolve_multi(dimension, dimension.default_add_ons()));
    }
    dimension
        .default_option()
        .map(|option| Selection::resolve_single(dimension, option.id().clone()))
}
