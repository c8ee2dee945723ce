//! KPI analysis: the fixed business metrics and their formatted report.

use crate::models::KpiMetrics;

// ---------------------------------------------------------------------------
// KpiAnalysis
// ---------------------------------------------------------------------------

/// Builds the formatted KPI report from a set of business metrics.
pub struct KpiAnalysis {
    metrics: KpiMetrics,
}

impl KpiAnalysis {
    /// Create a new `KpiAnalysis` over the given metrics.
    pub fn new(metrics: KpiMetrics) -> Self {
        Self { metrics }
    }

    /// The metrics this analysis reports on.
    pub fn metrics(&self) -> &KpiMetrics {
        &self.metrics
    }

    /// Render the multi-line KPI report.
    pub fn render(&self) -> String {
        let m = &self.metrics;
        let mut out = String::new();
        let bar = "=".repeat(60);

        out.push_str(&format!("{bar}\n"));
        out.push_str("E-COMMERCE KPI ANALYSIS\n");
        out.push_str(&format!("{bar}\n"));
        out.push_str(&format!("Price          : ${}\n", m.average_price));
        out.push_str(&format!("Discount       : {}%\n", m.average_discount));
        out.push_str(&format!("Effective Price: ${}\n", m.effective_price));
        out.push_str(&format!("Loss / Unit    : ${}\n", m.loss_per_unit()));
        out.push_str(&format!(
            "Rating         : {} ({:.1}%)\n",
            m.average_rating,
            m.rating_percent()
        ));
        out.push('\n');
        out.push_str("Recommendations:\n");
        out.push_str("1. Reduce discount to 25\u{2013}30%\n");
        out.push_str("2. Improve quality & delivery\n");
        out.push_str("3. Use targeted discounts\n");
        out
    }
}

impl Default for KpiAnalysis {
    fn default() -> Self {
        Self::new(KpiMetrics::default())
    }
}
