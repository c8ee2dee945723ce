use crate::config;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// KpiMetrics — Fixed business metrics with one derived field
// ---------------------------------------------------------------------------

/// Key performance indicators for the storefront.
///
/// `effective_price` is derived at construction time from the average price
/// and discount; the struct is otherwise a flat value holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KpiMetrics {
    pub average_price: f64,
    /// Average discount in whole percent (e.g. `40.0` for 40 %).
    pub average_discount: f64,
    pub average_rating: f64,
    /// Average price after discount: `price * (1 - discount / 100)`.
    pub effective_price: f64,
}

impl KpiMetrics {
    /// Build KPI metrics, computing the effective price from the inputs.
    pub fn new(average_price: f64, average_discount: f64, average_rating: f64) -> Self {
        // (100 - d) / 100 keeps round inputs exact (950 * 60 / 100 == 570).
        let effective_price = average_price * (100.0 - average_discount) / 100.0;
        Self {
            average_price,
            average_discount,
            average_rating,
            effective_price,
        }
    }

    /// Revenue lost to discounting, per unit sold.
    pub fn loss_per_unit(&self) -> f64 {
        self.average_price - self.effective_price
    }

    /// Average rating expressed as a percentage of the 5-star maximum.
    pub fn rating_percent(&self) -> f64 {
        self.average_rating / 5.0 * 100.0
    }
}

impl Default for KpiMetrics {
    fn default() -> Self {
        Self::new(
            config::KPI_AVERAGE_PRICE,
            config::KPI_AVERAGE_DISCOUNT,
            config::KPI_AVERAGE_RATING,
        )
    }
}
