//! Chart rendering via plotters.
//!
//! All charts are rendered as PNG files. Single-panel helpers own their
//! backend; the pricing chart splits one canvas into a scatter panel and a
//! 2D histogram panel. Density and group size are encoded with an HSL color
//! ramp running from dark blue (low) to yellow (high).

use crate::config;
use crate::error::Result;
use chrono::{Duration, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

// ---------------------------------------------------------------------------
// Public chart entry points
// ---------------------------------------------------------------------------

/// Render a plain alpha-blended scatter chart.
pub fn scatter(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    points: &[(f64, f64)],
) -> Result<()> {
    let root = BitMapBackend::new(path, config::CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    scatter_on(&root, title, x_label, y_label, points)?;
    root.present()?;
    Ok(())
}

/// Render the side-by-side pricing canvas: scatter on the left, 2D density
/// histogram on the right.
pub fn pricing_panels(path: &Path, points: &[(f64, f64)]) -> Result<()> {
    let root = BitMapBackend::new(path, config::WIDE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (left, right) = root.split_horizontally((config::WIDE_CHART_SIZE.0 / 2) as i32);
    scatter_on(&left, "Price vs Discount", "Price", "Discount (%)", points)?;
    hist2d_on(
        &right,
        "Discount Density",
        "Price",
        "Discount (%)",
        points,
        config::HIST2D_BINS,
    )?;

    root.present()?;
    Ok(())
}

/// Render a bubble chart on a log-scaled x axis.
///
/// Each point is `(x, y, weight)`; the weight drives both marker radius and
/// marker hue, largest weight brightest.
pub fn bubble(
    path: &Path,
    title: &str,
    x_label: &str,
    y_label: &str,
    points: &[(f64, f64, usize)],
) -> Result<()> {
    let root = BitMapBackend::new(path, config::CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let (x_min, x_max) = bounds(&xs);
    let (y_min, y_max) = padded(bounds(&ys));
    let max_weight = points.iter().map(|p| p.2).max().unwrap_or(1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min * 0.8..x_max * 1.2).log_scale(), y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(points.iter().map(|&(x, y, w)| {
        let t = w as f64 / max_weight as f64;
        let radius = (4.0 + 12.0 * t) as i32;
        Circle::new((x, y), radius, ramp_color(t).mix(0.8).filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Render a line chart over a daily series, with date-formatted x labels.
pub fn date_line(
    path: &Path,
    title: &str,
    y_label: &str,
    series: &[(NaiveDate, f64)],
) -> Result<()> {
    let start = match series.first() {
        Some(p) => p.0,
        None => {
            return Err(crate::error::ShopstatError::EmptyDataset(
                "line chart requires at least one point".to_string(),
            ))
        }
    };

    let root = BitMapBackend::new(path, config::CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let ys: Vec<f64> = series.iter().map(|p| p.1).collect();
    let (y_min, y_max) = padded(bounds(&ys));
    let last_day = series.len().saturating_sub(1) as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..last_day.max(1), y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_label)
        .x_label_formatter(&move |offset: &i32| {
            (start + Duration::days(*offset as i64))
                .format("%b %d")
                .to_string()
        })
        .draw()?;

    chart.draw_series(LineSeries::new(
        series
            .iter()
            .enumerate()
            .map(|(i, p)| (i as i32, p.1)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Panel helpers
// ---------------------------------------------------------------------------

fn scatter_on<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_label: &str,
    y_label: &str,
    points: &[(f64, f64)],
) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let (x_min, x_max) = padded(bounds(&xs));
    let (y_min, y_max) = padded(bounds(&ys));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.mix(0.4).filled())),
    )?;

    Ok(())
}

fn hist2d_on<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_label: &str,
    y_label: &str,
    points: &[(f64, f64)],
    bins: usize,
) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let (x_min, x_max) = bounds(&xs);
    let (y_min, y_max) = bounds(&ys);

    let counts = bin_counts(points, (x_min, x_max), (y_min, y_max), bins);
    let max_count = counts.iter().flatten().copied().max().unwrap_or(1).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    let x_step = (x_max - x_min) / bins as f64;
    let y_step = (y_max - y_min) / bins as f64;

    chart.draw_series((0..bins).flat_map(|i| {
        let counts = &counts;
        (0..bins).map(move |j| {
            let t = counts[i][j] as f64 / max_count as f64;
            let x0 = x_min + i as f64 * x_step;
            let y0 = y_min + j as f64 * y_step;
            Rectangle::new([(x0, y0), (x0 + x_step, y0 + y_step)], ramp_color(t).filled())
        })
    }))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Free-standing helpers
// ---------------------------------------------------------------------------

/// Bin points into a `bins` x `bins` count grid over the given ranges.
fn bin_counts(
    points: &[(f64, f64)],
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
    bins: usize,
) -> Vec<Vec<usize>> {
    let mut counts = vec![vec![0usize; bins]; bins];
    let x_span = (x_max - x_min).max(f64::EPSILON);
    let y_span = (y_max - y_min).max(f64::EPSILON);

    for &(x, y) in points {
        let i = (((x - x_min) / x_span * bins as f64) as usize).min(bins - 1);
        let j = (((y - y_min) / y_span * bins as f64) as usize).min(bins - 1);
        counts[i][j] += 1;
    }
    counts
}

/// Density color ramp: dark blue at 0, yellow at 1.
fn ramp_color(t: f64) -> HSLColor {
    let t = t.clamp(0.0, 1.0);
    HSLColor(0.66 - 0.51 * t, 0.85, 0.15 + 0.40 * t)
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min.is_finite() && max.is_finite() && min < max {
        (min, max)
    } else {
        (0.0, 1.0)
    }
}

fn padded((min, max): (f64, f64)) -> (f64, f64) {
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}
