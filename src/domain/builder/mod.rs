//! Builder state machine and pricing computation.
//!
//! A `QuoteBuilder` walks the wizard steps of one service schema, keeps one
//! resolved `Selection` per dimension and recomputes `QuoteTotals` after
//! every change.

mod customer;
pub mod pricing;
mod quote_builder;
mod selection;
mod snapshot;
mod step;

pub use customer::CustomerInfo;
pub use pricing::{compute_totals, QuoteTotals};
pub use quote_builder::QuoteBuilder;
pub use selection::Selection;
pub use snapshot::BuilderSnapshot;
pub use step::WizardStep;
