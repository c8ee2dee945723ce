use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PricePoint — Single synthetic price/discount observation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PricePoint {
    pub price: f64,
    /// Discount percentage, clipped to `[0, 50]`.
    pub discount: f64,
}

// ---------------------------------------------------------------------------
// PricingSummary — Aggregated price/discount statistics for one sampled set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PricingSummary {
    pub samples: usize,
    pub mean_price: f64,
    pub mean_discount: f64,
    /// Pearson correlation between price and discount.
    pub correlation: f64,
}
