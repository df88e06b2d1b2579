//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuoteStore` - Session-wide store of saved builder snapshots

mod quote_store;

pub use quote_store::{ConfiguredService, ConfiguredTotals, QuoteStore};
