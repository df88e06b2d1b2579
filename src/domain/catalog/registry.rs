//! Catalog registry: the one mapping from service type to catalog.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::foundation::ServiceType;

use super::{parse_catalog, CatalogError, ServiceCatalog};

/// Parsed embedded catalogs, shared by every session in the process.
static EMBEDDED: OnceCell<Arc<CatalogRegistry>> = OnceCell::new();

/// Holds exactly one catalog per `ServiceType`.
///
/// Lookup is a total `match` over the enum, so a registry that was built
/// successfully can always serve every service.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    website: Arc<ServiceCatalog>,
    image: Arc<ServiceCatalog>,
    sound: Arc<ServiceCatalog>,
    video: Arc<ServiceCatalog>,
    animation: Arc<ServiceCatalog>,
    branding: Arc<ServiceCatalog>,
}

impl CatalogRegistry {
    /// Returns the catalogs compiled into the binary, parsing them once.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an embedded document fails validation.
    pub fn embedded() -> Result<Arc<Self>, CatalogError> {
        EMBEDDED
            .get_or_try_init(|| -> Result<Arc<Self>, CatalogError> {
                let sources = ServiceType::all()
                    .iter()
                    .map(|service| (*service, embedded_source(*service).to_string()));
                let registry = Self::from_sources(sources)?;
                tracing::debug!("Parsed {} embedded catalogs", ServiceType::all().len());
                Ok(Arc::new(registry))
            })
            .cloned()
    }

    /// Loads `<service>.yaml` for every service from a directory.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if a file is missing or unreadable, or any
    /// validation error from the documents.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut sources = Vec::with_capacity(ServiceType::all().len());
        for service in ServiceType::all() {
            let path = dir.join(format!("{}.yaml", service.as_str()));
            let yaml = std::fs::read_to_string(&path)
                .map_err(|source| CatalogError::Io { path: path.clone(), source })?;
            sources.push((*service, yaml));
        }
        let registry = Self::from_sources(sources)?;
        tracing::info!(dir = %dir.display(), "Loaded catalogs from directory");
        Ok(registry)
    }

    /// Builds a registry from one YAML document per service.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingService` if any service has no document.
    pub fn from_sources(
        sources: impl IntoIterator<Item = (ServiceType, String)>,
    ) -> Result<Self, CatalogError> {
        let mut parsed = HashMap::new();
        for (service, yaml) in sources {
            parsed.insert(service, Arc::new(parse_catalog(service, &yaml)?));
        }

        let mut take = |service: ServiceType| {
            parsed
                .remove(&service)
                .ok_or(CatalogError::MissingService(service))
        };

        Ok(Self {
            website: take(ServiceType::Website)?,
            image: take(ServiceType::Image)?,
            sound: take(ServiceType::Sound)?,
            video: take(ServiceType::Video)?,
            animation: take(ServiceType::Animation)?,
            branding: take(ServiceType::Branding)?,
        })
    }

    /// Returns the catalog for a service.
    pub fn catalog(&self, service: ServiceType) -> &Arc<ServiceCatalog> {
        match service {
            ServiceType::Website => &self.website,
            ServiceType::Image => &self.image,
            ServiceType::Sound => &self.sound,
            ServiceType::Video => &self.video,
            ServiceType::Animation => &self.animation,
            ServiceType::Branding => &self.branding,
        }
    }
}

/// Raw YAML for the catalogs shipped with the crate.
pub fn embedded_source(service: ServiceType) -> &'static str {
    match service {
        ServiceType::Website => include_str!("data/website.yaml"),
        ServiceType::Image => include_str!("data/image.yaml"),
        ServiceType::Sound => include_str!("data/sound.yaml"),
        ServiceType::Video => include_str!("data/video.yaml"),
        ServiceType::Animation => include_str!("data/animation.yaml"),
        ServiceType::Branding => include_str!("data/branding.yaml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::DimensionRole;

    #[test]
    fn embedded_catalogs_all_validate() {
        let registry = CatalogRegistry::embedded().unwrap();
        for service in ServiceType::all() {
            assert_eq!(registry.catalog(*service).service(), *service);
        }
    }

    #[test]
    fn embedded_registry_is_shared() {
        let a = CatalogRegistry::embedded().unwrap();
        let b = CatalogRegistry::embedded().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn embedded_catalogs_have_presets() {
        let registry = CatalogRegistry::embedded().unwrap();
        for service in ServiceType::all() {
            assert!(
                !registry.catalog(*service).presets().is_empty(),
                "{} has no presets",
                service
            );
        }
    }

    #[test]
    fn every_embedded_schema_has_a_primary_dimension() {
        let registry = CatalogRegistry::embedded().unwrap();
        for service in ServiceType::all() {
            let schema = registry.catalog(*service).schema();
            assert!(schema.dimensions_with_role(DimensionRole::Primary).count() > 0);
        }
    }

    #[test]
    fn from_sources_reports_missing_service() {
        let sources = vec![(
            ServiceType::Website,
            embedded_source(ServiceType::Website).to_string(),
        )];
        let err = CatalogRegistry::from_sources(sources).unwrap_err();
        assert!(matches!(err, CatalogError::MissingService(_)));
    }

    #[test]
    fn load_dir_reads_one_file_per_service() {
        let dir = tempfile::tempdir().unwrap();
        for service in ServiceType::all() {
            std::fs::write(
                dir.path().join(format!("{}.yaml", service.as_str())),
                embedded_source(*service),
            )
            .unwrap();
        }

        let registry = CatalogRegistry::load_dir(dir.path()).unwrap();
        assert_eq!(registry.catalog(ServiceType::Sound).service(), ServiceType::Sound);
    }

    #[test]
    fn load_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogRegistry::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
