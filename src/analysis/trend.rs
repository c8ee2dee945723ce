//! Discount trend over time: a 90-day daily discount series reduced to
//! per-day means and rendered as a line chart.

use crate::error::{Result, ShopstatError};
use crate::models::{DailyDiscount, TrendSummary};
use crate::workspace::Workspace;
use crate::{chart, config, generate, stats};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// TrendAnalysis
// ---------------------------------------------------------------------------

/// Analysis interface for the daily discount trend.
pub struct TrendAnalysis<'a> {
    ws: &'a Workspace,
    days: usize,
}

impl<'a> TrendAnalysis<'a> {
    /// Create a new `TrendAnalysis` bound to the given workspace.
    pub fn new(ws: &'a Workspace, days: usize) -> Self {
        Self { ws, days }
    }

    /// Generate the synthetic daily discount series for this analysis.
    pub fn samples(&self) -> Result<Vec<DailyDiscount>> {
        generate::daily_discounts(config::TREND_SEED, trend_start()?, self.days)
    }

    /// Reduce the series to one mean discount per date, in date order.
    pub fn daily_averages(&self) -> Result<Vec<DailyDiscount>> {
        let data = self.samples()?;
        if data.is_empty() {
            return Err(ShopstatError::EmptyDataset(
                "trend analysis requires at least one day".to_string(),
            ));
        }

        let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
        for d in &data {
            by_date.entry(d.date).or_default().push(d.discount);
        }

        Ok(by_date
            .into_iter()
            .map(|(date, discounts)| DailyDiscount {
                date,
                discount: stats::mean(&discounts),
            })
            .collect())
    }

    /// Render the line chart into the workspace and return its path.
    pub fn render(&self) -> Result<PathBuf> {
        let daily = self.daily_averages()?;
        let series: Vec<(NaiveDate, f64)> = daily.iter().map(|d| (d.date, d.discount)).collect();

        let path = self.ws.path(config::TREND_CHART);
        chart::date_line(&path, "Discount Trend Over Time", "Discount (%)", &series)?;
        Ok(self.ws.record(path))
    }

    /// Run the full analysis: render the chart and summarize the window.
    pub fn run(&self) -> Result<TrendSummary> {
        let daily = self.daily_averages()?;

        let series: Vec<(NaiveDate, f64)> = daily.iter().map(|d| (d.date, d.discount)).collect();
        let path = self.ws.path(config::TREND_CHART);
        chart::date_line(&path, "Discount Trend Over Time", "Discount (%)", &series)?;
        self.ws.record(path);

        let discounts: Vec<f64> = daily.iter().map(|d| d.discount).collect();
        // daily_averages guarantees a non-empty, date-ordered series here.
        let first = daily[0].date;
        let last = daily[daily.len() - 1].date;

        Ok(TrendSummary {
            days: daily.len(),
            first_date: first,
            last_date: last,
            min_discount: discounts.iter().copied().fold(f64::INFINITY, f64::min),
            max_discount: discounts.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            avg_discount: stats::mean(&discounts),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn trend_start() -> Result<NaiveDate> {
    NaiveDate::parse_from_str(config::TREND_START, "%Y-%m-%d")
        .map_err(|e| ShopstatError::InvalidArgument(format!("bad trend start date: {e}")))
}
