use std::path::PathBuf;

/// Seed for the price/discount sample generator.
pub const PRICING_SEED: u64 = 123;
/// Seed for the subcategory rating sample generator.
pub const RATING_SEED: u64 = 0;
/// Seed for the discount/rating sample generator.
pub const DISCOUNT_SEED: u64 = 42;
/// Seed for the daily discount trend generator.
pub const TREND_SEED: u64 = 42;

/// Default number of synthetic records per sampled dataset.
pub const DEFAULT_SAMPLES: usize = 1000;
/// Default number of days in the discount trend window.
pub const DEFAULT_TREND_DAYS: usize = 90;
/// First day of the discount trend window.
pub const TREND_START: &str = "2025-01-01";

/// Number of bins along each axis of the 2D price/discount histogram.
pub const HIST2D_BINS: usize = 40;

/// Pixel dimensions for single-panel charts.
pub const CHART_SIZE: (u32, u32) = (900, 600);
/// Pixel dimensions for the side-by-side pricing canvas.
pub const WIDE_CHART_SIZE: (u32, u32) = (1400, 500);

/// Fixed KPI inputs: average price, average discount (percent), average rating.
pub const KPI_AVERAGE_PRICE: f64 = 950.0;
pub const KPI_AVERAGE_DISCOUNT: f64 = 40.0;
pub const KPI_AVERAGE_RATING: f64 = 3.8;

// Artifact file names inside the workspace directory.
pub const PRICING_CHART: &str = "price_vs_discount.png";
pub const RATINGS_CHART: &str = "price_vs_rating.png";
pub const DISCOUNTS_CHART: &str = "rating_vs_discount.png";
pub const TREND_CHART: &str = "discount_trend.png";
pub const CATALOG_TABLE: &str = "catalog.html";
pub const RUN_SUMMARY: &str = "summary.json";

pub fn default_output_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("shopstat")
    } else {
        PathBuf::from(".shopstat-out")
    }
}
