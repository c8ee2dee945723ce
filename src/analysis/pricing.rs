//! Price vs discount analysis: sampled log-normal prices against their
//! linearly-dependent discounts, rendered as a scatter plus density panel.

use crate::error::{Result, ShopstatError};
use crate::models::{PricePoint, PricingSummary};
use crate::workspace::Workspace;
use crate::{chart, config, generate, stats};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// PricingAnalysis
// ---------------------------------------------------------------------------

/// Analysis interface for the price/discount relationship.
pub struct PricingAnalysis<'a> {
    ws: &'a Workspace,
    samples: usize,
}

impl<'a> PricingAnalysis<'a> {
    /// Create a new `PricingAnalysis` bound to the given workspace.
    pub fn new(ws: &'a Workspace, samples: usize) -> Self {
        Self { ws, samples }
    }

    /// Generate the synthetic price/discount dataset for this analysis.
    pub fn samples(&self) -> Result<Vec<PricePoint>> {
        generate::price_discount_samples(config::PRICING_SEED, self.samples)
    }

    /// Render the side-by-side scatter + density chart into the workspace and
    /// return its path.
    pub fn render(&self) -> Result<PathBuf> {
        let data = self.samples()?;
        let points = to_points(&data)?;
        let path = self.ws.path(config::PRICING_CHART);
        chart::pricing_panels(&path, &points)?;
        Ok(self.ws.record(path))
    }

    /// Run the full analysis: render the chart and compute the summary
    /// statistics (mean price, mean discount, price/discount correlation).
    pub fn run(&self) -> Result<PricingSummary> {
        let data = self.samples()?;
        let points = to_points(&data)?;

        let path = self.ws.path(config::PRICING_CHART);
        chart::pricing_panels(&path, &points)?;
        self.ws.record(path);

        let prices: Vec<f64> = data.iter().map(|p| p.price).collect();
        let discounts: Vec<f64> = data.iter().map(|p| p.discount).collect();

        Ok(PricingSummary {
            samples: data.len(),
            mean_price: stats::mean(&prices),
            mean_discount: stats::mean(&discounts),
            correlation: stats::pearson(&prices, &discounts)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn to_points(data: &[PricePoint]) -> Result<Vec<(f64, f64)>> {
    if data.is_empty() {
        return Err(ShopstatError::EmptyDataset(
            "pricing analysis requires at least one sample".to_string(),
        ));
    }
    Ok(data.iter().map(|p| (p.price, p.discount)).collect())
}
