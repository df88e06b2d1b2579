//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional file
//! and environment variables using the `config` and `dotenvy` crates.
//! Environment variables use the `SERVICE_QUOTE` prefix and nested values use
//! double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use service_quote::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Logging with filter {}", config.logging.filter);
//! ```

mod catalog;
mod error;
mod logging;
mod pricing;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use pricing::{BundleDiscountConfig, PricingConfig};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "SERVICE_QUOTE";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration backed by the embedded catalogs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog sources
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Pricing rules (bundle discounts)
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Logging filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SERVICE_QUOTE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SERVICE_QUOTE__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `SERVICE_QUOTE__CATALOG__DIR=./catalogs` -> `catalog.dir = ./catalogs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, overlaid by environment variables
    ///
    /// The file format (TOML, YAML or JSON) is chosen by extension.
    /// Environment variables take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or values
    /// cannot be parsed into expected types
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.pricing.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}
