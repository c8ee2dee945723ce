use crate::models::{DiscountReport, KpiMetrics, PricingSummary, RatingReport, TrendSummary};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RunSummary — Combined results of a full analysis run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunSummary {
    pub pricing: PricingSummary,
    pub ratings: RatingReport,
    pub discounts: DiscountReport,
    pub trend: TrendSummary,
    pub kpi: KpiMetrics,
}
