//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where catalog documents come from.
///
/// Both sources fall back to the catalogs embedded in the crate when unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding one `<service>.yaml` per service type
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Flat tier plan catalog
    #[serde(default)]
    pub plans_file: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate that configured paths exist
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(dir) = &self.dir {
            if !dir.is_dir() {
                return Err(ValidationError::CatalogDirNotFound(dir.clone()));
            }
        }
        if let Some(file) = &self.plans_file {
            if !file.is_file() {
                return Err(ValidationError::PlansFileNotFound(file.clone()));
            }
        }
        Ok(())
    }
}
