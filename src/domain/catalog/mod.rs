//! Option catalog module.
//!
//! Immutable, per-dimension lists of selectable options for every
//! wizard-driven service, loaded from YAML content.
//!
//! # Module Structure
//!
//! - `option` - CatalogOption, Price and OptionCharge
//! - `dimension` - Dimension and DimensionRole
//! - `schema` - ServiceSchema, wizard steps and ServiceCatalog
//! - `document` - YAML document parsing and validation
//! - `registry` - CatalogRegistry, one catalog per ServiceType
//! - `errors` - CatalogError

mod dimension;
mod document;
mod errors;
mod option;
mod registry;
mod schema;

pub use dimension::{Dimension, DimensionId, DimensionRole};
pub use document::parse_catalog;
pub use errors::CatalogError;
pub use option::{CatalogOption, OptionCharge, OptionId, Price};
pub use registry::{embedded_source, CatalogRegistry};
pub use schema::{ServiceCatalog, ServiceSchema, WizardStepDefinition};
