//! Flat tier catalog for plan services.
//!
//! ```yaml
//! services:
//!   - id: seo
//!     label: SEO
//!     tiers:
//!       - { id: starter, label: Starter, price: 200 }
//!     add_ons:
//!       - { id: audit, label: Technical audit, price: 150 }
//! ```

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::Money;

use super::{AddOnId, PlanItem, PlanServiceId, TierId};

static EMBEDDED: OnceCell<Arc<PlanCatalog>> = OnceCell::new();

const EMBEDDED_SOURCE: &str = include_str!("data/plans.yaml");

/// A priced tier or add-on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricedEntry<Id> {
    pub id: Id,
    pub label: String,
    pub price: Money,
}

/// One flat tier-priced service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanService {
    pub id: PlanServiceId,
    pub label: String,
    pub tiers: Vec<PricedEntry<TierId>>,
    #[serde(default)]
    pub add_ons: Vec<PricedEntry<AddOnId>>,
}

impl PlanService {
    pub fn tier(&self, id: &TierId) -> Option<&PricedEntry<TierId>> {
        self.tiers.iter().find(|t| &t.id == id)
    }

    pub fn add_on(&self, id: &AddOnId) -> Option<&PricedEntry<AddOnId>> {
        self.add_ons.iter().find(|a| &a.id == id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanDocument {
    services: Vec<PlanService>,
}

/// Catalog of every plan service with its tiers and add-ons.
///
/// Unknown service, tier or add-on ids price at zero rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    services: Vec<PlanService>,
}

impl PlanCatalog {
    /// Returns the plan catalog compiled into the binary, parsing it once.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded document fails validation.
    pub fn embedded() -> Result<Arc<Self>, CatalogError> {
        EMBEDDED
            .get_or_try_init(|| -> Result<Arc<Self>, CatalogError> {
                Ok(Arc::new(Self::from_yaml(EMBEDDED_SOURCE)?))
            })
            .cloned()
    }

    /// Loads a plan catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or any parse or
    /// validation error.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml(&yaml)?;
        tracing::info!(path = %path.display(), services = catalog.services.len(), "Loaded plan catalog");
        Ok(catalog)
    }

    /// Parses and validates a plan catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidPlan` for duplicate ids, services
    /// without tiers, or negative prices.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let doc: PlanDocument = serde_yaml::from_str(yaml)?;
        validate(&doc.services)?;
        Ok(Self {
            services: doc.services,
        })
    }

    pub fn services(&self) -> &[PlanService] {
        &self.services
    }

    pub fn service(&self, id: &PlanServiceId) -> Option<&PlanService> {
        self.services.iter().find(|s| &s.id == id)
    }

    /// Price of `tier` for `service`; zero when either is unknown.
    pub fn tier_price(&self, service: &PlanServiceId, tier: &TierId) -> Money {
        self.service(service)
            .and_then(|s| s.tier(tier))
            .map(|t| t.price)
            .unwrap_or(Money::ZERO)
    }

    /// Price of `add_on` for `service`; zero when either is unknown.
    pub fn add_on_price(&self, service: &PlanServiceId, add_on: &AddOnId) -> Money {
        self.service(service)
            .and_then(|s| s.add_on(add_on))
            .map(|a| a.price)
            .unwrap_or(Money::ZERO)
    }

    /// Tier price plus every selected add-on price.
    pub fn item_price(&self, item: &PlanItem) -> Money {
        let add_ons: Money = item
            .add_on_ids
            .iter()
            .map(|id| self.add_on_price(&item.service_id, id))
            .sum();
        self.tier_price(&item.service_id, &item.tier_id) + add_ons
    }
}

fn validate(services: &[PlanService]) -> Result<(), CatalogError> {
    let mut service_ids = HashSet::new();
    for service in services {
        if !service_ids.insert(&service.id) {
            return Err(CatalogError::InvalidPlan(format!(
                "service '{}' is declared twice",
                service.id
            )));
        }
        if service.tiers.is_empty() {
            return Err(CatalogError::InvalidPlan(format!(
                "service '{}' has no tiers",
                service.id
            )));
        }
        check_entries(&service.id, "tier", &service.tiers)?;
        check_entries(&service.id, "add-on", &service.add_ons)?;
    }
    Ok(())
}

fn check_entries<Id>(
    service: &PlanServiceId,
    kind: &str,
    entries: &[PricedEntry<Id>],
) -> Result<(), CatalogError>
where
    Id: std::hash::Hash + Eq + std::fmt::Display,
{
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(&entry.id) {
            return Err(CatalogError::InvalidPlan(format!(
                "{} '{}' is declared twice in '{}'",
                kind, entry.id, service
            )));
        }
        if entry.price < Money::ZERO {
            return Err(CatalogError::InvalidPlan(format!(
                "{} '{}' in '{}' has a negative price",
                kind, entry.id, service
            )));
        }
    }
    Ok(())
}
