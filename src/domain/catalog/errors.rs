//! Catalog loading and validation errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::{ServiceType, ValidationError};

/// Errors raised while loading catalog documents.
///
/// Catalog content is configuration data; a malformed document is rejected
/// at load time so the pricing path never has to handle it.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog loaded for {expected} declares service {found}")]
    ServiceMismatch {
        expected: ServiceType,
        found: ServiceType,
    },

    #[error("No catalog provided for {0}")]
    MissingService(ServiceType),

    #[error("{service}: duplicate dimension '{dimension}'")]
    DuplicateDimension { service: ServiceType, dimension: String },

    #[error("{service}: duplicate option '{option}' in dimension '{dimension}'")]
    DuplicateOption {
        service: ServiceType,
        dimension: String,
        option: String,
    },

    #[error("{service}: dimension '{dimension}' has no options")]
    EmptyDimension { service: ServiceType, dimension: String },

    #[error("{service}: dimension '{dimension}' needs a default option")]
    MissingDefault { service: ServiceType, dimension: String },

    #[error("{service}: default '{option}' is not an option of dimension '{dimension}'")]
    UnknownDefault {
        service: ServiceType,
        dimension: String,
        option: String,
    },

    #[error("{service}: option '{option}' in dimension '{dimension}' is invalid: {reason}")]
    InvalidOption {
        service: ServiceType,
        dimension: String,
        option: String,
        reason: String,
    },

    #[error("{service}: more than one timeline dimension")]
    MultipleTimelines { service: ServiceType },

    #[error("{service}: catalog defines no steps")]
    NoSteps { service: ServiceType },

    #[error("{service}: step '{step}' references unknown dimension '{dimension}'")]
    UnknownStepDimension {
        service: ServiceType,
        step: String,
        dimension: String,
    },

    #[error("{service}: dimension '{dimension}' must appear in exactly one step")]
    UnplacedDimension { service: ServiceType, dimension: String },

    #[error("{service}: preset '{category}' is invalid: {reason}")]
    InvalidPreset {
        service: ServiceType,
        category: String,
        reason: String,
    },

    #[error("Invalid plan catalog: {0}")]
    InvalidPlan(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CatalogError {
    pub(crate) fn invalid_option(
        service: ServiceType,
        dimension: &str,
        option: &str,
        reason: impl Into<String>,
    ) -> Self {
        CatalogError::InvalidOption {
            service,
            dimension: dimension.to_string(),
            option: option.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_preset(
        service: ServiceType,
        category: &str,
        reason: impl Into<String>,
    ) -> Self {
        CatalogError::InvalidPreset {
            service,
            category: category.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_names_its_location() {
        let err = CatalogError::invalid_option(ServiceType::Sound, "extras", "stems", "bad");
        assert_eq!(
            err.to_string(),
            "sound: option 'stems' in dimension 'extras' is invalid: bad"
        );
    }

    #[test]
    fn missing_service_displays_tag() {
        let err = CatalogError::MissingService(ServiceType::Branding);
        assert_eq!(err.to_string(), "No catalog provided for branding");
    }
}
