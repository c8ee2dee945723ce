//! Synthetic e-commerce analytics for Rust.
//!
//! Generates seeded synthetic storefront datasets (prices, discounts,
//! ratings, a daily discount series), computes descriptive statistics and
//! Pearson/Spearman correlations over them, and renders charts, a styled
//! catalog table, and a fixed KPI report into a workspace directory.
//!
//! # Quick start
//!
//! ```no_run
//! use shopstat::Shopstat;
//!
//! let shop = Shopstat::builder().out_dir("./out").build().unwrap();
//!
//! // Price vs discount: chart plus summary statistics
//! let pricing = shop.pricing().run().unwrap();
//! println!("correlation: {:.3}", pricing.correlation);
//!
//! // Fixed KPI report
//! println!("{}", shop.kpi().render());
//! ```

pub mod analysis;
pub mod chart;
pub mod config;
pub mod error;
pub mod generate;
pub mod models;
pub mod stats;
pub mod style;
pub mod workspace;

pub use error::{Result, ShopstatError};
pub use models::{KpiMetrics, RunSummary};
pub use workspace::Workspace;

use analysis::{
    CatalogStyling, DiscountAnalysis, KpiAnalysis, PricingAnalysis, RatingAnalysis, TrendAnalysis,
};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

// ---------------------------------------------------------------------------
// ShopstatBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Shopstat`] instance.
///
/// Use [`Shopstat::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ShopstatBuilder::build) to create the
/// analytics instance.
pub struct ShopstatBuilder {
    out_dir: Option<PathBuf>,
    samples: usize,
    trend_days: usize,
}

impl Default for ShopstatBuilder {
    fn default() -> Self {
        Self {
            out_dir: None,
            samples: config::DEFAULT_SAMPLES,
            trend_days: config::DEFAULT_TREND_DAYS,
        }
    }
}

impl ShopstatBuilder {
    /// Set a custom artifact output directory.
    ///
    /// If not set, the platform-appropriate default data directory is used
    /// (e.g. `~/.local/share/shopstat` on Linux).
    pub fn out_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the number of records per sampled dataset. Defaults to 1000.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the length of the discount trend window in days. Defaults to 90.
    pub fn trend_days(mut self, days: usize) -> Self {
        self.trend_days = days;
        self
    }

    /// Build the analytics instance, creating the output directory.
    pub fn build(self) -> Result<Shopstat> {
        let ws = Workspace::new(self.out_dir)?;
        Ok(Shopstat {
            ws,
            samples: self.samples,
            trend_days: self.trend_days,
        })
    }
}

// ---------------------------------------------------------------------------
// Shopstat
// ---------------------------------------------------------------------------

/// The main entry point for shopstat analytics.
///
/// Owns the [`Workspace`] that charts and reports are written into and
/// exposes the individual analyses as lightweight borrowing wrappers.
///
/// Created via [`Shopstat::builder()`].
pub struct Shopstat {
    ws: Workspace,
    samples: usize,
    trend_days: usize,
}

impl Shopstat {
    /// Create a new builder for configuring the analytics instance.
    pub fn builder() -> ShopstatBuilder {
        ShopstatBuilder::default()
    }

    // -- Analysis accessors ------------------------------------------------

    /// Access the price vs discount analysis.
    ///
    /// Returns a lightweight wrapper that borrows the workspace and renders
    /// the scatter + density panel chart.
    pub fn pricing(&self) -> PricingAnalysis<'_> {
        PricingAnalysis::new(&self.ws, self.samples)
    }

    /// Access the subcategory price vs rating analysis (bubble chart and
    /// Pearson/Spearman correlations).
    pub fn ratings(&self) -> RatingAnalysis<'_> {
        RatingAnalysis::new(&self.ws, self.samples)
    }

    /// Access the discount vs rating analysis (correlation with p-value).
    pub fn discounts(&self) -> DiscountAnalysis<'_> {
        DiscountAnalysis::new(&self.ws, self.samples)
    }

    /// Access the daily discount trend analysis.
    pub fn trends(&self) -> TrendAnalysis<'_> {
        TrendAnalysis::new(&self.ws, self.trend_days)
    }

    /// Access the KPI report over the fixed business metrics.
    pub fn kpi(&self) -> KpiAnalysis {
        KpiAnalysis::default()
    }

    /// Access the styled catalog table.
    pub fn catalog(&self) -> CatalogStyling<'_> {
        CatalogStyling::new(&self.ws)
    }

    // -- Whole-run operations ----------------------------------------------

    /// Run every analysis, write all charts plus the catalog table, and
    /// persist the combined summary as a JSON artifact.
    pub fn run_report(&self) -> Result<RunSummary> {
        info!(out_dir = %self.ws.out_dir.display(), "running full report");

        let pricing = self.pricing().run()?;
        let ratings = self.ratings().run()?;
        let discounts = self.discounts().run()?;
        let trend = self.trends().run()?;
        self.catalog().write()?;
        let kpi = self.kpi().metrics().clone();

        let summary = RunSummary {
            pricing,
            ratings,
            discounts,
            trend,
            kpi,
        };
        self.ws.write_json(config::RUN_SUMMARY, &summary)?;

        Ok(summary)
    }

    /// Return the file names of all artifacts written so far.
    pub fn artifacts(&self) -> Vec<String> {
        self.ws.artifacts()
    }

    /// Return a reference to the underlying [`Workspace`] for advanced usage.
    pub fn workspace(&self) -> &Workspace {
        &self.ws
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Shopstat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shopstat(out_dir={}, samples={}, trend_days={}, artifacts=[{}])",
            self.ws.out_dir.display(),
            self.samples,
            self.trend_days,
            self.ws.artifacts().join(", ")
        )
    }
}
