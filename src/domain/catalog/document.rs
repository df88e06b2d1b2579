//! YAML catalog documents and their validation.
//!
//! A document describes one service:
//!
//! ```yaml
//! service: video
//! dimensions:
//!   - id: duration
//!     label: Duration
//!     role: primary
//!     default: short
//!     options:
//!       - { id: short, label: Up to 60 seconds, price: 100 }
//!       - { id: feature, label: Over 10 minutes, price: quote }
//!   - id: timeline
//!     label: Timeline
//!     role: timeline
//!     default: standard
//!     options:
//!       - { id: standard, label: Standard, multiplier: 1.0 }
//!       - { id: rush, label: Rush, multiplier: 1.5 }
//! steps:
//!   - { title: Length, dimensions: [duration] }
//!   - { title: Timeline, dimensions: [timeline] }
//! presets:
//!   promo:
//!     select: { duration: short }
//! ```
//!
//! Records are deserialized loosely and then converted into domain types,
//! rejecting anything the builder could not price.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::domain::foundation::{Money, Multiplier, ServiceType};
use crate::domain::recommendation::{CategoryKey, PresetTable, RecommendationPreset};

use super::{
    CatalogError, CatalogOption, Dimension, DimensionId, DimensionRole, OptionCharge, OptionId,
    Price, ServiceCatalog, ServiceSchema, WizardStepDefinition,
};

const QUOTE_KEYWORD: &str = "quote";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    service: ServiceType,
    dimensions: Vec<DimensionRecord>,
    steps: Vec<StepRecord>,
    #[serde(default)]
    presets: BTreeMap<String, PresetRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DimensionRecord {
    id: String,
    label: String,
    role: DimensionRole,
    #[serde(default)]
    default: Option<String>,
    options: Vec<OptionRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OptionRecord {
    id: String,
    label: String,
    #[serde(default)]
    price: Option<PriceRecord>,
    #[serde(default)]
    multiplier: Option<f64>,
    #[serde(default)]
    included_by_default: bool,
    #[serde(default)]
    starts_at: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceRecord {
    Amount(i64),
    Keyword(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepRecord {
    title: String,
    dimensions: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetRecord {
    #[serde(default)]
    select: BTreeMap<String, String>,
    #[serde(default)]
    add_ons: BTreeMap<String, Vec<String>>,
}

/// Parses and validates the catalog document for `expected`.
///
/// # Errors
///
/// Returns `CatalogError` if the YAML is malformed, declares a different
/// service, or breaks any schema invariant.
pub fn parse_catalog(expected: ServiceType, yaml: &str) -> Result<ServiceCatalog, CatalogError> {
    let doc: CatalogDocument = serde_yaml::from_str(yaml)?;
    if doc.service != expected {
        return Err(CatalogError::ServiceMismatch {
            expected,
            found: doc.service,
        });
    }

    let service = doc.service;
    let dimensions = build_dimensions(service, doc.dimensions)?;
    let steps = build_steps(service, &dimensions, doc.steps)?;
    let schema = ServiceSchema::new(service, dimensions, steps);
    let presets = build_presets(&schema, doc.presets)?;

    Ok(ServiceCatalog::new(schema, presets))
}

fn build_dimensions(
    service: ServiceType,
    records: Vec<DimensionRecord>,
) -> Result<Vec<Dimension>, CatalogError> {
    let timelines = records
        .iter()
        .filter(|r| r.role == DimensionRole::Timeline)
        .count();
    if timelines > 1 {
        return Err(CatalogError::MultipleTimelines { service });
    }

    let mut seen = HashSet::new();
    let mut dimensions = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.clone()) {
            return Err(CatalogError::DuplicateDimension {
                service,
                dimension: record.id,
            });
        }
        dimensions.push(build_dimension(service, record)?);
    }

    Ok(dimensions)
}

fn build_dimension(service: ServiceType, record: DimensionRecord) -> Result<Dimension, CatalogError> {
    if record.options.is_empty() {
        return Err(CatalogError::EmptyDimension {
            service,
            dimension: record.id,
        });
    }

    let mut seen = HashSet::new();
    let mut options = Vec::with_capacity(record.options.len());
    for option in record.options {
        if !seen.insert(option.id.clone()) {
            return Err(CatalogError::DuplicateOption {
                service,
                dimension: record.id,
                option: option.id,
            });
        }
        options.push(build_option(service, &record.id, record.role, option)?);
    }

    let default = match (record.role.is_single_select(), record.default) {
        (true, None) => {
            return Err(CatalogError::MissingDefault {
                service,
                dimension: record.id,
            })
        }
        (true, Some(id)) => {
            let id = OptionId::new(id);
            if !options.iter().any(|o| o.id() == &id) {
                return Err(CatalogError::UnknownDefault {
                    service,
                    dimension: record.id,
                    option: id.to_string(),
                });
            }
            Some(id)
        }
        (false, Some(id)) => {
            return Err(CatalogError::invalid_option(
                service,
                &record.id,
                &id,
                "add-on dimensions are pre-checked with included_by_default, not a default",
            ))
        }
        (false, None) => None,
    };

    Ok(Dimension::new(
        DimensionId::new(record.id),
        record.label,
        record.role,
        options,
        default,
    ))
}

fn build_option(
    service: ServiceType,
    dimension: &str,
    role: DimensionRole,
    record: OptionRecord,
) -> Result<CatalogOption, CatalogError> {
    let invalid = |reason: String| CatalogError::invalid_option(service, dimension, &record.id, reason);

    let charge = match (role, &record.price, record.multiplier) {
        (DimensionRole::Timeline, None, Some(value)) => {
            let multiplier = Multiplier::try_new(value).map_err(|e| invalid(e.to_string()))?;
            OptionCharge::Multiplier(multiplier)
        }
        (DimensionRole::Timeline, _, _) => {
            return Err(invalid("timeline options need a multiplier and no price".to_string()))
        }
        (_, _, Some(_)) => {
            return Err(invalid("only timeline options carry a multiplier".to_string()))
        }
        (_, Some(price), None) => OptionCharge::Price(parse_price(price).map_err(invalid)?),
        (_, None, None) if record.included_by_default => OptionCharge::Price(Price::Fixed(Money::ZERO)),
        (_, None, None) => return Err(invalid("option needs a price".to_string())),
    };

    if role == DimensionRole::AddOn && matches!(charge, OptionCharge::Price(Price::RequiresQuote)) {
        return Err(invalid("add-on options cannot require a custom quote".to_string()));
    }

    Ok(CatalogOption::new(
        OptionId::new(record.id.as_str()),
        record.label.clone(),
        charge,
        record.included_by_default,
        record.starts_at,
    ))
}

fn parse_price(record: &PriceRecord) -> Result<Price, String> {
    match record {
        PriceRecord::Amount(units) if *units >= 0 => Ok(Price::Fixed(Money::from_units(*units))),
        PriceRecord::Amount(units) => Err(format!("price cannot be negative, got {}", units)),
        PriceRecord::Keyword(word) if word == QUOTE_KEYWORD => Ok(Price::RequiresQuote),
        PriceRecord::Keyword(word) => Err(format!(
            "expected an amount or '{}', got '{}'",
            QUOTE_KEYWORD, word
        )),
    }
}

fn build_steps(
    service: ServiceType,
    dimensions: &[Dimension],
    records: Vec<StepRecord>,
) -> Result<Vec<WizardStepDefinition>, CatalogError> {
    if records.is_empty() {
        return Err(CatalogError::NoSteps { service });
    }

    let mut placements: HashMap<&str, usize> =
        dimensions.iter().map(|d| (d.id().as_str(), 0)).collect();

    for step in &records {
        for dimension in &step.dimensions {
            match placements.get_mut(dimension.as_str()) {
                Some(count) => *count += 1,
                None => {
                    return Err(CatalogError::UnknownStepDimension {
                        service,
                        step: step.title.clone(),
                        dimension: dimension.clone(),
                    })
                }
            }
        }
    }

    if let Some(unplaced) = dimensions
        .iter()
        .find(|d| placements.get(d.id().as_str()) != Some(&1))
    {
        return Err(CatalogError::UnplacedDimension {
            service,
            dimension: unplaced.id().to_string(),
        });
    }

    Ok(records
        .into_iter()
        .map(|r| WizardStepDefinition {
            title: r.title,
            dimensions: r.dimensions.into_iter().map(DimensionId::new).collect(),
        })
        .collect())
}

fn build_presets(
    schema: &ServiceSchema,
    records: BTreeMap<String, PresetRecord>,
) -> Result<PresetTable, CatalogError> {
    let service = schema.service();
    let mut presets = BTreeMap::new();

    for (category, record) in records {
        let key = CategoryKey::try_new(&category)?;

        let mut selections = BTreeMap::new();
        for (dimension, option) in &record.select {
            let found = preset_dimension(schema, &category, dimension, DimensionRole::Primary)?;
            let option = OptionId::new(option.as_str());
            if found.option(&option).is_none() {
                return Err(CatalogError::invalid_preset(
                    service,
                    &category,
                    format!("'{}' is not an option of '{}'", option, dimension),
                ));
            }
            selections.insert(found.id().clone(), option);
        }

        let mut add_ons = BTreeMap::new();
        for (dimension, ids) in &record.add_ons {
            let found = preset_dimension(schema, &category, dimension, DimensionRole::AddOn)?;
            let mut checked = BTreeSet::new();
            for id in ids {
                let option = OptionId::new(id.as_str());
                if found.option(&option).is_none() {
                    return Err(CatalogError::invalid_preset(
                        service,
                        &category,
                        format!("'{}' is not an add-on of '{}'", option, dimension),
                    ));
                }
                checked.insert(option);
            }
            add_ons.insert(found.id().clone(), checked);
        }

        if presets
            .insert(key, RecommendationPreset::new(selections, add_ons))
            .is_some()
        {
            return Err(CatalogError::invalid_preset(
                service,
                &category,
                "category is declared twice",
            ));
        }
    }

    Ok(PresetTable::new(presets))
}

fn preset_dimension<'a>(
    schema: &'a ServiceSchema,
    category: &str,
    dimension: &str,
    role: DimensionRole,
) -> Result<&'a Dimension, CatalogError> {
    let service = schema.service();
    let found = schema
        .dimension(&DimensionId::new(dimension))
        .ok_or_else(|| {
            CatalogError::invalid_preset(
                service,
                category,
                format!("unknown dimension '{}'", dimension),
            )
        })?;
    if found.role() != role {
        return Err(CatalogError::invalid_preset(
            service,
            category,
            format!("dimension '{}' is not {:?}", dimension, role),
        ));
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
service: sound
dimensions:
  - id: length
    label: Length
    role: primary
    default: jingle
    options:
      - { id: jingle, label: Jingle, price: 150 }
      - { id: album, label: Album, price: quote }
  - id: extras
    label: Extras
    role: add_on
    options:
      - { id: stems, label: Stems, price: 80 }
      - { id: loop, label: Loop, included_by_default: true }
  - id: timeline
    label: Timeline
    role: timeline
    default: standard
    options:
      - { id: standard, label: Standard, multiplier: 1.0 }
      - { id: rush, label: Rush, multiplier: 1.5 }
steps:
  - { title: Length, dimensions: [length] }
  - { title: Extras, dimensions: [extras] }
  - { title: Timeline, dimensions: [timeline] }
presets:
  podcast:
    select: { length: jingle }
    add_ons: { extras: [stems] }
"#;

    fn parse(yaml: &str) -> Result<ServiceCatalog, CatalogError> {
        parse_catalog(ServiceType::Sound, yaml)
    }

    #[test]
    fn parses_minimal_document() {
        let catalog = parse(MINIMAL).unwrap();
        let schema = catalog.schema();

        assert_eq!(schema.step_count(), 3);
        assert_eq!(schema.dimensions().len(), 3);
        let album = schema
            .option(&DimensionId::new("length"), &OptionId::new("album"))
            .unwrap();
        assert_eq!(album.price(), Some(Price::RequiresQuote));
        let looped = schema
            .option(&DimensionId::new("extras"), &OptionId::new("loop"))
            .unwrap();
        assert_eq!(looped.price(), Some(Price::Fixed(Money::ZERO)));
        assert_eq!(catalog.presets().len(), 1);
    }

    #[test]
    fn rejects_service_mismatch() {
        let err = parse_catalog(ServiceType::Video, MINIMAL).unwrap_err();
        assert!(matches!(err, CatalogError::ServiceMismatch { .. }));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(parse("service: [").unwrap_err(), CatalogError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_default() {
        let yaml = MINIMAL.replace("default: jingle", "default: symphony");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::UnknownDefault { .. }));
    }

    #[test]
    fn rejects_missing_default() {
        let yaml = MINIMAL.replace("    default: jingle\n", "");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::MissingDefault { .. }));
    }

    #[test]
    fn rejects_duplicate_option() {
        let yaml = MINIMAL.replace("id: album", "id: jingle");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::DuplicateOption { .. }));
    }

    #[test]
    fn rejects_quote_priced_add_on() {
        let yaml = MINIMAL.replace("label: Stems, price: 80", "label: Stems, price: quote");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::InvalidOption { .. }));
    }

    #[test]
    fn rejects_timeline_option_without_multiplier() {
        let yaml = MINIMAL.replace("label: Rush, multiplier: 1.5", "label: Rush, price: 100");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::InvalidOption { .. }));
    }

    #[test]
    fn rejects_multiplier_below_one() {
        let yaml = MINIMAL.replace("multiplier: 1.5", "multiplier: 0.8");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::InvalidOption { .. }));
    }

    #[test]
    fn rejects_unknown_price_keyword() {
        let yaml = MINIMAL.replace("price: quote", "price: ask");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::InvalidOption { .. }));
    }

    #[test]
    fn rejects_negative_price() {
        let yaml = MINIMAL.replace("price: 150", "price: -150");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::InvalidOption { .. }));
    }

    #[test]
    fn rejects_dimension_missing_from_steps() {
        let yaml = MINIMAL.replace("  - { title: Extras, dimensions: [extras] }\n", "");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::UnplacedDimension { .. }));
    }

    #[test]
    fn rejects_dimension_in_two_steps() {
        let yaml = MINIMAL.replace("dimensions: [extras]", "dimensions: [extras, length]");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::UnplacedDimension { .. }));
    }

    #[test]
    fn rejects_step_with_unknown_dimension() {
        let yaml = MINIMAL.replace("dimensions: [extras]", "dimensions: [extras, mood]");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::UnknownStepDimension { .. }));
    }

    #[test]
    fn rejects_preset_on_non_primary_dimension() {
        let yaml = MINIMAL.replace("select: { length: jingle }", "select: { timeline: rush }");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::InvalidPreset { .. }));
    }

    #[test]
    fn rejects_preset_with_unknown_add_on() {
        let yaml = MINIMAL.replace("add_ons: { extras: [stems] }", "add_ons: { extras: [choir] }");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::InvalidPreset { .. }));
    }

    #[test]
    fn rejects_second_timeline() {
        let yaml = MINIMAL.replace("id: extras\n    label: Extras\n    role: add_on", "id: extras\n    label: Extras\n    role: timeline");
        assert!(matches!(parse(&yaml).unwrap_err(), CatalogError::MultipleTimelines { .. }));
    }
}
