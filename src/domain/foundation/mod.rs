//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the quoting domain.

mod errors;
mod ids;
mod macros;
mod money;
mod multiplier;
mod percentage;
mod service_type;
mod timestamp;

pub use errors::ValidationError;
pub use ids::QuoteSessionId;
pub(crate) use macros::string_id;
pub use money::{round_half_away_from_zero, Money};
pub use multiplier::Multiplier;
pub use percentage::Percentage;
pub use service_type::ServiceType;
pub use timestamp::Timestamp;
