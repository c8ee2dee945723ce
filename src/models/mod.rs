pub mod discount;
pub mod kpi;
pub mod pricing;
pub mod product;
pub mod rating;
pub mod report;

pub use discount::*;
pub use kpi::*;
pub use pricing::*;
pub use product::*;
pub use rating::*;
pub use report::*;
