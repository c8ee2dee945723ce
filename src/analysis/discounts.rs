//! Discount vs rating analysis: uniform discounts against a weak linear
//! rating response, with a correlation significance test.

use crate::error::{Result, ShopstatError};
use crate::models::{DiscountObservation, DiscountReport};
use crate::workspace::Workspace;
use crate::{chart, config, generate, stats};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// DiscountAnalysis
// ---------------------------------------------------------------------------

/// Analysis interface for the discount/rating relationship.
pub struct DiscountAnalysis<'a> {
    ws: &'a Workspace,
    samples: usize,
}

impl<'a> DiscountAnalysis<'a> {
    /// Create a new `DiscountAnalysis` bound to the given workspace.
    pub fn new(ws: &'a Workspace, samples: usize) -> Self {
        Self { ws, samples }
    }

    /// Generate the synthetic discount/rating dataset for this analysis.
    pub fn samples(&self) -> Result<Vec<DiscountObservation>> {
        generate::discount_rating_samples(config::DISCOUNT_SEED, self.samples)
    }

    /// Render the scatter chart into the workspace and return its path.
    pub fn render(&self) -> Result<PathBuf> {
        let points = self.points()?;
        let path = self.ws.path(config::DISCOUNTS_CHART);
        chart::scatter(
            &path,
            "Rating vs Discount",
            "Discount (%)",
            "Rating",
            &points,
        )?;
        Ok(self.ws.record(path))
    }

    /// Run the full analysis: render the chart and compute the correlation
    /// with its two-sided p-value.
    pub fn run(&self) -> Result<DiscountReport> {
        let data = self.samples()?;
        let points: Vec<(f64, f64)> = data.iter().map(|o| (o.discount, o.rating)).collect();
        if points.is_empty() {
            return Err(ShopstatError::EmptyDataset(
                "discount analysis requires at least one sample".to_string(),
            ));
        }

        let path = self.ws.path(config::DISCOUNTS_CHART);
        chart::scatter(
            &path,
            "Rating vs Discount",
            "Discount (%)",
            "Rating",
            &points,
        )?;
        self.ws.record(path);

        let discounts: Vec<f64> = data.iter().map(|o| o.discount).collect();
        let ratings: Vec<f64> = data.iter().map(|o| o.rating).collect();
        let (correlation, p_value) = stats::pearson_test(&discounts, &ratings)?;

        Ok(DiscountReport {
            correlation,
            p_value,
            samples: data.len(),
        })
    }

    fn points(&self) -> Result<Vec<(f64, f64)>> {
        let data = self.samples()?;
        if data.is_empty() {
            return Err(ShopstatError::EmptyDataset(
                "discount analysis requires at least one sample".to_string(),
            ));
        }
        Ok(data.iter().map(|o| (o.discount, o.rating)).collect())
    }
}
