//! Plain-record snapshot of a builder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::DimensionId;
use crate::domain::foundation::{Multiplier, ServiceType};
use crate::domain::recommendation::CategoryKey;

use super::{CustomerInfo, QuoteTotals, Selection, WizardStep};

/// Everything a builder knows, detached from the live builder.
///
/// Saving a snapshot copies it; later edits to the builder never reach a
/// snapshot that was already saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderSnapshot {
    pub service: ServiceType,
    pub current_step: WizardStep,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryKey>,
    pub selections: BTreeMap<DimensionId, Selection>,
    pub timeline_multiplier: Multiplier,
    pub totals: QuoteTotals,
    #[serde(default)]
    pub customer: CustomerInfo,
}
