//! Price vs rating analysis over subcategory aggregates.
//!
//! Groups the sampled products by subcategory, renders a bubble chart of
//! average price against average rating (bubble size = group count), and
//! reports Pearson correlation over log prices alongside Spearman rank
//! correlation over raw prices.

use crate::error::{Result, ShopstatError};
use crate::models::{RatedProduct, RatingReport, SubcategorySummary};
use crate::workspace::Workspace;
use crate::{chart, config, generate, stats};
use std::collections::BTreeMap;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// RatingAnalysis
// ---------------------------------------------------------------------------

/// Analysis interface for the subcategory price/rating relationship.
pub struct RatingAnalysis<'a> {
    ws: &'a Workspace,
    samples: usize,
}

impl<'a> RatingAnalysis<'a> {
    /// Create a new `RatingAnalysis` bound to the given workspace.
    pub fn new(ws: &'a Workspace, samples: usize) -> Self {
        Self { ws, samples }
    }

    /// Generate the synthetic rated-product dataset for this analysis.
    pub fn samples(&self) -> Result<Vec<RatedProduct>> {
        generate::rated_products(config::RATING_SEED, self.samples)
    }

    /// Group the dataset into per-subcategory aggregates, ordered by
    /// subcategory name.
    pub fn subcategory_summaries(&self) -> Result<Vec<SubcategorySummary>> {
        let data = self.samples()?;
        if data.is_empty() {
            return Err(ShopstatError::EmptyDataset(
                "rating analysis requires at least one sample".to_string(),
            ));
        }
        Ok(group_by_subcategory(&data))
    }

    /// Render the bubble chart into the workspace and return its path.
    pub fn render(&self) -> Result<PathBuf> {
        let groups = self.subcategory_summaries()?;
        let points: Vec<(f64, f64, usize)> = groups
            .iter()
            .map(|g| (g.avg_price, g.avg_rating, g.count))
            .collect();

        let path = self.ws.path(config::RATINGS_CHART);
        chart::bubble(
            &path,
            "Average Price vs Rating",
            "Avg Price",
            "Avg Rating",
            &points,
        )?;
        Ok(self.ws.record(path))
    }

    /// Run the full analysis: render the chart and compute the correlation
    /// report over the subcategory aggregates.
    pub fn run(&self) -> Result<RatingReport> {
        let groups = self.subcategory_summaries()?;

        let points: Vec<(f64, f64, usize)> = groups
            .iter()
            .map(|g| (g.avg_price, g.avg_rating, g.count))
            .collect();
        let path = self.ws.path(config::RATINGS_CHART);
        chart::bubble(
            &path,
            "Average Price vs Rating",
            "Avg Price",
            "Avg Rating",
            &points,
        )?;
        self.ws.record(path);

        let log_prices: Vec<f64> = groups.iter().map(|g| g.avg_price.ln()).collect();
        let prices: Vec<f64> = groups.iter().map(|g| g.avg_price).collect();
        let ratings: Vec<f64> = groups.iter().map(|g| g.avg_rating).collect();

        Ok(RatingReport {
            pearson: stats::pearson(&log_prices, &ratings)?,
            spearman: stats::spearman(&prices, &ratings)?,
            subcategories: groups,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn group_by_subcategory(data: &[RatedProduct]) -> Vec<SubcategorySummary> {
    let mut grouped: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for p in data {
        let entry = grouped.entry(p.subcategory.as_str()).or_default();
        entry.0.push(p.price);
        entry.1.push(p.rating);
    }

    grouped
        .into_iter()
        .map(|(subcategory, (prices, ratings))| SubcategorySummary {
            subcategory: subcategory.to_string(),
            avg_price: stats::mean(&prices),
            avg_rating: stats::mean(&ratings),
            count: ratings.len(),
            sd_rating: stats::sample_std(&ratings),
        })
        .collect()
}
