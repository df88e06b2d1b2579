//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::catalog::CatalogError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Catalog loading failed: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Catalog directory does not exist: {0}")]
    CatalogDirNotFound(PathBuf),

    #[error("Plan catalog file does not exist: {0}")]
    PlansFileNotFound(PathBuf),

    #[error("Invalid bundle discount schedule: {0}")]
    InvalidBundleDiscount(String),

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
