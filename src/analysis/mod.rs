pub mod catalog;
pub mod discounts;
pub mod kpi;
pub mod pricing;
pub mod ratings;
pub mod trend;

pub use catalog::CatalogStyling;
pub use discounts::DiscountAnalysis;
pub use kpi::KpiAnalysis;
pub use pricing::PricingAnalysis;
pub use ratings::RatingAnalysis;
pub use trend::TrendAnalysis;
