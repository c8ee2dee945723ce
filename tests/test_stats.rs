//! Unit tests for the descriptive statistics helpers.

use shopstat::stats;

// ---------------------------------------------------------------------------
// Mean and standard deviation
// ---------------------------------------------------------------------------

#[test]
fn mean_of_values() {
    assert_eq!(stats::mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
}

#[test]
fn mean_of_empty_is_zero() {
    assert_eq!(stats::mean(&[]), 0.0);
}

#[test]
fn sample_std_uses_n_minus_one() {
    // Variance of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 denominator is 32/7.
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let expected = (32.0f64 / 7.0).sqrt();
    assert!((stats::sample_std(&values) - expected).abs() < 1e-12);
}

#[test]
fn sample_std_of_singleton_is_zero() {
    assert_eq!(stats::sample_std(&[42.0]), 0.0);
}

// ---------------------------------------------------------------------------
// Pearson correlation
// ---------------------------------------------------------------------------

#[test]
fn pearson_perfect_positive() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.0, 4.0, 6.0, 8.0, 10.0];
    let r = stats::pearson(&x, &y).unwrap();
    assert!((r - 1.0).abs() < 1e-12);
}

#[test]
fn pearson_perfect_negative() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [10.0, 8.0, 6.0, 4.0, 2.0];
    let r = stats::pearson(&x, &y).unwrap();
    assert!((r + 1.0).abs() < 1e-12);
}

#[test]
fn pearson_known_value() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.0, 4.0, 5.0, 4.0, 5.0];
    let r = stats::pearson(&x, &y).unwrap();
    assert!((r - 0.7745966692414834).abs() < 1e-12);
}

#[test]
fn pearson_zero_variance_is_zero() {
    let x = [3.0, 3.0, 3.0, 3.0];
    let y = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(stats::pearson(&x, &y).unwrap(), 0.0);
}

#[test]
fn pearson_rejects_mismatched_lengths() {
    assert!(stats::pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
}

#[test]
fn pearson_rejects_single_observation() {
    assert!(stats::pearson(&[1.0], &[2.0]).is_err());
}

// ---------------------------------------------------------------------------
// Pearson significance test
// ---------------------------------------------------------------------------

#[test]
fn pearson_test_perfect_correlation_has_zero_p() {
    let x: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 1.0).collect();
    let (r, p) = stats::pearson_test(&x, &y).unwrap();
    assert!((r - 1.0).abs() < 1e-12);
    assert_eq!(p, 0.0);
}

#[test]
fn pearson_test_p_value_in_unit_interval() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = [2.0, 1.0, 4.0, 3.0, 6.0, 5.0];
    let (r, p) = stats::pearson_test(&x, &y).unwrap();
    assert!((-1.0..=1.0).contains(&r));
    assert!((0.0..=1.0).contains(&p));
}

#[test]
fn pearson_test_strong_relationship_is_significant() {
    let x: Vec<f64> = (0..30).map(|v| v as f64).collect();
    // Strong linear signal with a small deterministic wobble.
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + (v * 0.7).sin()).collect();
    let (_, p) = stats::pearson_test(&x, &y).unwrap();
    assert!(p < 0.001);
}

#[test]
fn pearson_test_rejects_tiny_samples() {
    assert!(stats::pearson_test(&[1.0, 2.0], &[2.0, 1.0]).is_err());
}

// ---------------------------------------------------------------------------
// Spearman correlation and ranks
// ---------------------------------------------------------------------------

#[test]
fn spearman_monotonic_nonlinear_is_one() {
    let x: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y: Vec<f64> = x.iter().map(|v| v.powi(3)).collect();
    let rho = stats::spearman(&x, &y).unwrap();
    assert!((rho - 1.0).abs() < 1e-12);
}

#[test]
fn spearman_reversed_is_minus_one() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [9.0, 7.0, 5.0, 3.0];
    let rho = stats::spearman(&x, &y).unwrap();
    assert!((rho + 1.0).abs() < 1e-12);
}

#[test]
fn ranks_average_ties() {
    assert_eq!(stats::ranks(&[1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.5, 2.5, 4.0]);
}

#[test]
fn ranks_preserve_input_order() {
    assert_eq!(stats::ranks(&[30.0, 10.0, 20.0]), vec![3.0, 1.0, 2.0]);
}
