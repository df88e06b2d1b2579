//! QuoteSession - the service object behind one buyer's quote.
//!
//! A session owns the unified quote store, the tier plan and handles to the
//! catalogs. It is created once per session and passed to whatever drives the
//! wizards; nothing in the crate reaches for it globally.

use std::sync::Arc;

use tracing::info;

use crate::adapters::storage::InMemoryQuoteStore;
use crate::config::{AppConfig, ConfigError};
use crate::domain::builder::QuoteBuilder;
use crate::domain::catalog::CatalogRegistry;
use crate::domain::foundation::{QuoteSessionId, ServiceType, Timestamp};
use crate::domain::plan::{BundleDiscountSchedule, Plan, PlanCatalog};
use crate::ports::QuoteStore;

use super::summary::{QuoteSummary, ServiceLine};

/// One buyer's quote across wizard services and the tier plan.
pub struct QuoteSession {
    id: QuoteSessionId,
    registry: Arc<CatalogRegistry>,
    plan_catalog: Arc<PlanCatalog>,
    store: Box<dyn QuoteStore>,
    plan: Plan,
}

impl QuoteSession {
    /// Creates a session backed by an in-memory store.
    pub fn new(
        registry: Arc<CatalogRegistry>,
        plan_catalog: Arc<PlanCatalog>,
        schedule: BundleDiscountSchedule,
    ) -> Self {
        Self::with_store(
            registry,
            plan_catalog,
            schedule,
            Box::new(InMemoryQuoteStore::new()),
        )
    }

    pub fn with_store(
        registry: Arc<CatalogRegistry>,
        plan_catalog: Arc<PlanCatalog>,
        schedule: BundleDiscountSchedule,
        store: Box<dyn QuoteStore>,
    ) -> Self {
        let id = QuoteSessionId::new();
        info!(session_id = %id, "Started quote session");
        Self {
            id,
            registry,
            plan_catalog,
            store,
            plan: Plan::with_schedule(schedule),
        }
    }

    /// Creates a session from application configuration.
    ///
    /// Catalogs come from the configured paths, or the embedded ones when no
    /// path is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid or a catalog
    /// fails to load.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let registry = match &config.catalog.dir {
            Some(dir) => Arc::new(CatalogRegistry::load_dir(dir)?),
            None => CatalogRegistry::embedded()?,
        };
        let plan_catalog = match &config.catalog.plans_file {
            Some(path) => Arc::new(PlanCatalog::load_file(path)?),
            None => PlanCatalog::embedded()?,
        };
        let schedule = config.pricing.schedule()?;

        Ok(Self::new(registry, plan_catalog, schedule))
    }

    pub fn id(&self) -> QuoteSessionId {
        self.id
    }

    pub fn registry(&self) -> &Arc<CatalogRegistry> {
        &self.registry
    }

    pub fn plan_catalog(&self) -> &Arc<PlanCatalog> {
        &self.plan_catalog
    }

    /// Returns a builder for `service`, restored from its saved snapshot if
    /// there is one.
    pub fn builder(&self, service: ServiceType) -> QuoteBuilder {
        let mut builder = QuoteBuilder::new(Arc::clone(self.registry.catalog(service)));
        builder.load_from(self.store.as_ref());
        builder
    }

    /// Saves `builder` into the unified quote.
    pub fn save(&mut self, builder: &QuoteBuilder) {
        builder.save_to(self.store.as_mut());
    }

    /// Resets `builder` and drops its service from the unified quote.
    pub fn reset(&mut self, builder: &mut QuoteBuilder) {
        builder.reset(self.store.as_mut());
    }

    pub fn store(&self) -> &dyn QuoteStore {
        self.store.as_ref()
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn plan_mut(&mut self) -> &mut Plan {
        &mut self.plan
    }

    /// The service a "continue your quote" link should open.
    pub fn first_configured_service(&self) -> Option<ServiceType> {
        self.store.first_configured_service()
    }

    /// Empties the unified quote and the plan.
    pub fn clear(&mut self) {
        self.store.clear_all();
        self.plan.clear();
        info!(session_id = %self.id, "Cleared quote session");
    }

    /// Builds the combined summary of saved services and the plan.
    pub fn summary(&self) -> QuoteSummary {
        let services: Vec<ServiceLine> = self
            .store
            .configured_services()
            .into_iter()
            .map(|configured| {
                let has_starting_prices = QuoteBuilder::from_snapshot(
                    Arc::clone(self.registry.catalog(configured.service)),
                    configured.snapshot.clone(),
                )
                .has_starting_prices();
                ServiceLine::new(configured, has_starting_prices)
            })
            .collect();

        let configured = self.store.combined_total();
        let plan = self.plan.totals(&self.plan_catalog);

        QuoteSummary {
            session_id: self.id,
            generated_at: Timestamp::now(),
            services,
            configured,
            plan,
            grand_total: configured.total + plan.total,
            requires_custom_quote: configured.has_custom_quote,
        }
    }
}

impl std::fmt::Debug for QuoteSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteSession")
            .field("id", &self.id)
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}
