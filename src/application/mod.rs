//! Application layer - the quote session and its summary.
//!
//! This layer coordinates the builders, the unified quote store and the tier
//! plan for one buyer, and produces the combined summary read model.

mod session;
mod summary;

pub use session::QuoteSession;
pub use summary::{QuoteSummary, ServiceLine};
