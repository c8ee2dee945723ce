//! Descriptive statistics: mean, standard deviation, and the Pearson and
//! Spearman correlation coefficients.
//!
//! Correlations are defined over equal-length finite slices; a zero-variance
//! input yields a correlation of 0 so results always lie in `[-1, 1]`. The
//! p-value for a Pearson correlation comes from the two-sided Student's t
//! test with `n - 2` degrees of freedom.

use crate::error::{Result, ShopstatError};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Arithmetic mean. Returns 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator). Returns 0 for fewer than
/// two values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Pearson product-moment correlation between two equal-length slices.
///
/// Returns 0 when either input has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y)?;

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let numerator: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();

    let sum_sq_x: f64 = x.iter().map(|xi| (xi - mean_x).powi(2)).sum();
    let sum_sq_y: f64 = y.iter().map(|yi| (yi - mean_y).powi(2)).sum();

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        Ok(0.0)
    } else {
        Ok((numerator / denominator).clamp(-1.0, 1.0))
    }
}

/// Pearson correlation with its two-sided p-value.
///
/// The test statistic is `r * sqrt((n - 2) / (1 - r^2))`, compared against
/// the Student's t distribution with `n - 2` degrees of freedom. A perfect
/// correlation reports a p-value of 0.
pub fn pearson_test(x: &[f64], y: &[f64]) -> Result<(f64, f64)> {
    check_paired(x, y)?;
    if x.len() < 3 {
        return Err(ShopstatError::EmptyDataset(
            "correlation test needs at least 3 observations".to_string(),
        ));
    }

    let r = pearson(x, y)?;
    if r.abs() >= 1.0 {
        return Ok((r, 0.0));
    }

    let df = (x.len() - 2) as f64;
    let t = r * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| ShopstatError::InvalidArgument(e.to_string()))?;
    let p = 2.0 * (1.0 - dist.cdf(t.abs()));

    Ok((r, p))
}

/// Spearman rank correlation: Pearson over tie-averaged ranks.
pub fn spearman(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y)?;
    pearson(&ranks(x), &ranks(y))
}

/// Fractional ranks (1-based), with ties receiving the average of the ranks
/// they span.
pub fn ranks(values: &[f64]) -> Vec<f64> {
    let mut indexed: Vec<(f64, usize)> = values.iter().copied().zip(0..).collect();
    indexed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut out = vec![0.0; values.len()];
    let mut i = 0;
    while i < indexed.len() {
        let mut j = i;
        while j + 1 < indexed.len() && indexed[j + 1].0 == indexed[i].0 {
            j += 1;
        }
        // Ranks i+1 ..= j+1 share the value; assign their average.
        let avg = (i + j + 2) as f64 / 2.0;
        for k in i..=j {
            out[indexed[k].1] = avg;
        }
        i = j + 1;
    }
    out
}

fn check_paired(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(ShopstatError::InvalidArgument(format!(
            "paired slices must have the same length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(ShopstatError::EmptyDataset(
            "correlation needs at least 2 observations".to_string(),
        ));
    }
    Ok(())
}
