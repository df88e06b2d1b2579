//! Quote Store Port - Interface for the unified quote of one session.
//!
//! Holds the last explicitly saved snapshot of each service builder and
//! aggregates them for the summary view.

use serde::Serialize;

use crate::domain::builder::BuilderSnapshot;
use crate::domain::foundation::{Money, ServiceType, Timestamp};

/// A saved service configuration with its save time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfiguredService {
    pub service: ServiceType,
    pub snapshot: BuilderSnapshot,
    pub saved_at: Timestamp,
}

/// Totals folded over every configured service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConfiguredTotals {
    pub service_count: usize,
    pub total: Money,
    pub has_custom_quote: bool,
}

/// Port for the session-wide store of saved builder snapshots.
///
/// # Invariants
///
/// - a service is present iff it was saved since its last clear
/// - saving replaces the whole snapshot, never merges
/// - `configured_services` is ordered by first save; re-saving a service
///   keeps its position
pub trait QuoteStore: Send + Sync {
    /// Stores `snapshot` for `service`, replacing any earlier one.
    fn save_service_config(&mut self, service: ServiceType, snapshot: BuilderSnapshot);

    /// Returns the saved snapshot for `service`.
    fn service_config(&self, service: ServiceType) -> Option<&BuilderSnapshot>;

    /// Removes `service`. Returns whether anything was removed.
    fn clear_service_config(&mut self, service: ServiceType) -> bool;

    /// Lists every configured service in first-save order.
    fn configured_services(&self) -> Vec<ConfiguredService>;

    /// When `service` was last saved.
    fn saved_at(&self, service: ServiceType) -> Option<Timestamp>;

    /// Removes every service.
    fn clear_all(&mut self);

    /// The deep-link target: the earliest configured service.
    fn first_configured_service(&self) -> Option<ServiceType> {
        self.configured_services().first().map(|c| c.service)
    }

    /// Sums the saved totals of every configured service.
    fn combined_total(&self) -> ConfiguredTotals {
        self.configured_services()
            .iter()
            .fold(ConfiguredTotals::default(), |acc, configured| {
                let totals = configured.snapshot.totals;
                ConfiguredTotals {
                    service_count: acc.service_count + 1,
                    total: acc.total + totals.total,
                    has_custom_quote: acc.has_custom_quote || totals.has_custom_quote,
                }
            })
    }
}
