use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RatedProduct — Single synthetic product with subcategory, price, and rating
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RatedProduct {
    pub subcategory: String,
    pub price: f64,
    /// Star rating, clipped to `[1, 5]`.
    pub rating: f64,
}

// ---------------------------------------------------------------------------
// SubcategorySummary — Per-subcategory aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SubcategorySummary {
    pub subcategory: String,
    pub avg_price: f64,
    pub avg_rating: f64,
    pub count: usize,
    /// Sample standard deviation of ratings within the subcategory.
    pub sd_rating: f64,
}

// ---------------------------------------------------------------------------
// RatingReport — Correlation results over the subcategory aggregates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RatingReport {
    /// Pearson correlation between ln(avg price) and avg rating.
    pub pearson: f64,
    /// Spearman rank correlation between avg price and avg rating.
    pub spearman: f64,
    pub subcategories: Vec<SubcategorySummary>,
}
