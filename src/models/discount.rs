use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DiscountObservation — Single discount/rating observation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DiscountObservation {
    /// Discount percentage in `[0, 50]`.
    pub discount: f64,
    /// Star rating, clipped to `[1, 5]`.
    pub rating: f64,
}

// ---------------------------------------------------------------------------
// DiscountReport — Correlation between discount and rating
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DiscountReport {
    pub correlation: f64,
    /// Two-sided p-value from the Student's t test on the correlation.
    pub p_value: f64,
    pub samples: usize,
}

// ---------------------------------------------------------------------------
// DailyDiscount — One day of the discount trend series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DailyDiscount {
    pub date: NaiveDate,
    /// Mean discount percentage for the day, in `[5, 30]`.
    pub discount: f64,
}

// ---------------------------------------------------------------------------
// TrendSummary — Aggregates over the trend window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TrendSummary {
    pub days: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub min_discount: f64,
    pub max_discount: f64,
    pub avg_discount: f64,
}
