//! Combined quote read model.

use serde::Serialize;

use crate::domain::builder::QuoteTotals;
use crate::domain::foundation::{Money, QuoteSessionId, ServiceType, Timestamp};
use crate::domain::plan::PlanTotals;
use crate::domain::recommendation::CategoryKey;
use crate::ports::{ConfiguredService, ConfiguredTotals};

/// One configured wizard service in the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceLine {
    pub service: ServiceType,
    pub display_name: &'static str,
    pub category: Option<CategoryKey>,
    pub totals: QuoteTotals,
    /// `total` is a floor when any option is priced "starting at".
    pub has_starting_prices: bool,
    pub saved_at: Timestamp,
}

impl ServiceLine {
    pub(crate) fn new(configured: ConfiguredService, has_starting_prices: bool) -> Self {
        Self {
            service: configured.service,
            display_name: configured.service.display_name(),
            category: configured.snapshot.category,
            totals: configured.snapshot.totals,
            has_starting_prices,
            saved_at: configured.saved_at,
        }
    }
}

/// Everything the summary view shows: saved wizard services, the tier plan
/// and the grand total across both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub session_id: QuoteSessionId,
    pub generated_at: Timestamp,
    pub services: Vec<ServiceLine>,
    pub configured: ConfiguredTotals,
    pub plan: PlanTotals,
    pub grand_total: Money,
    /// When true, `grand_total` is not payable until a custom quote is
    /// agreed.
    pub requires_custom_quote: bool,
}

impl QuoteSummary {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.plan.item_count == 0
    }
}
