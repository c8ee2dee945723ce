use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Product — Catalog row for the styled table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Product {
    pub name: String,
    pub price: f64,
    /// Discount as a fraction in `[0, 1]` (e.g. `0.60` for 60 %).
    pub discount: f64,
    pub rating: f64,
}

impl Product {
    pub fn new(name: &str, price: f64, discount: f64, rating: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
            discount,
            rating,
        }
    }
}

/// The fixed three-product catalog used by the styled table.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("A", 10.0, 0.60, 4.2),
        Product::new("B", 15.0, 0.05, 2.7),
        Product::new("C", 20.0, 0.20, 2.9),
    ]
}
