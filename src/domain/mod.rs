//! Domain layer containing pricing logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (money, multipliers, service types, errors)
//! - `catalog` - Option catalogs, dimension schemas and the catalog registry
//! - `recommendation` - Category presets that seed a builder
//! - `builder` - Per-service wizard state machine and pricing computation
//! - `plan` - Flat tier plan with bundle discounts

pub mod builder;
pub mod catalog;
pub mod foundation;
pub mod plan;
pub mod recommendation;
