//! In-Memory Quote Store Adapter
//!
//! Keeps saved snapshots for the lifetime of the process.

use crate::domain::builder::BuilderSnapshot;
use crate::domain::foundation::{ServiceType, Timestamp};
use crate::ports::{ConfiguredService, QuoteStore};

#[derive(Debug, Clone)]
struct Entry {
    service: ServiceType,
    snapshot: BuilderSnapshot,
    saved_at: Timestamp,
}

/// In-memory unified quote store.
///
/// Entries are kept in first-save order. A re-save replaces the entry in
/// place; a save after a clear appends at the end.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteStore {
    entries: Vec<Entry>,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of configured services.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, service: ServiceType) -> Option<usize> {
        self.entries.iter().position(|e| e.service == service)
    }
}

impl QuoteStore for InMemoryQuoteStore {
    fn save_service_config(&mut self, service: ServiceType, snapshot: BuilderSnapshot) {
        let entry = Entry {
            service,
            snapshot,
            saved_at: Timestamp::now(),
        };
        match self.position(service) {
            Some(idx) => self.entries[idx] = entry,
            None => self.entries.push(entry),
        }
    }

    fn service_config(&self, service: ServiceType) -> Option<&BuilderSnapshot> {
        self.entries
            .iter()
            .find(|e| e.service == service)
            .map(|e| &e.snapshot)
    }

    fn clear_service_config(&mut self, service: ServiceType) -> bool {
        match self.position(service) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    fn configured_services(&self) -> Vec<ConfiguredService> {
        self.entries
            .iter()
            .map(|e| ConfiguredService {
                service: e.service,
                snapshot: e.snapshot.clone(),
                saved_at: e.saved_at,
            })
            .collect()
    }

    fn saved_at(&self, service: ServiceType) -> Option<Timestamp> {
        self.entries
            .iter()
            .find(|e| e.service == service)
            .map(|e| e.saved_at)
    }

    fn clear_all(&mut self) {
        self.entries.clear();
    }
}
