//! Tests for the seeded synthetic dataset generators: reproducibility,
//! clipping bounds, and series shape.

use chrono::NaiveDate;
use shopstat::{config, generate};

fn trend_start() -> NaiveDate {
    NaiveDate::parse_from_str(config::TREND_START, "%Y-%m-%d").unwrap()
}

// ---------------------------------------------------------------------------
// Reproducibility
// ---------------------------------------------------------------------------

#[test]
fn price_discount_samples_are_seed_deterministic() {
    let a = generate::price_discount_samples(config::PRICING_SEED, 200).unwrap();
    let b = generate::price_discount_samples(config::PRICING_SEED, 200).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.price.to_bits(), y.price.to_bits());
        assert_eq!(x.discount.to_bits(), y.discount.to_bits());
    }
}

#[test]
fn rated_products_are_seed_deterministic() {
    let a = generate::rated_products(config::RATING_SEED, 200).unwrap();
    let b = generate::rated_products(config::RATING_SEED, 200).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.subcategory, y.subcategory);
        assert_eq!(x.price.to_bits(), y.price.to_bits());
        assert_eq!(x.rating.to_bits(), y.rating.to_bits());
    }
}

#[test]
fn different_seeds_give_different_samples() {
    let a = generate::price_discount_samples(1, 50).unwrap();
    let b = generate::price_discount_samples(2, 50).unwrap();
    assert!(a.iter().zip(b.iter()).any(|(x, y)| x.price != y.price));
}

#[test]
fn daily_discounts_are_seed_deterministic() {
    let a = generate::daily_discounts(config::TREND_SEED, trend_start(), 90).unwrap();
    let b = generate::daily_discounts(config::TREND_SEED, trend_start(), 90).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.date, y.date);
        assert_eq!(x.discount.to_bits(), y.discount.to_bits());
    }
}

// ---------------------------------------------------------------------------
// Clipping bounds
// ---------------------------------------------------------------------------

#[test]
fn discounts_stay_within_bounds() {
    let samples = generate::price_discount_samples(config::PRICING_SEED, 1000).unwrap();
    for p in &samples {
        assert!(p.price > 0.0);
        assert!((0.0..=50.0).contains(&p.discount));
    }
}

#[test]
fn ratings_stay_within_bounds() {
    let products = generate::rated_products(config::RATING_SEED, 1000).unwrap();
    for p in &products {
        assert!((1.0..=5.0).contains(&p.rating));
    }

    let obs = generate::discount_rating_samples(config::DISCOUNT_SEED, 1000).unwrap();
    for o in &obs {
        assert!((0.0..=50.0).contains(&o.discount));
        assert!((1.0..=5.0).contains(&o.rating));
    }
}

#[test]
fn trend_discounts_stay_within_bounds() {
    let series = generate::daily_discounts(config::TREND_SEED, trend_start(), 90).unwrap();
    for d in &series {
        assert!((5.0..=30.0).contains(&d.discount));
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn generators_honor_requested_length() {
    assert_eq!(generate::price_discount_samples(1, 0).unwrap().len(), 0);
    assert_eq!(generate::price_discount_samples(1, 7).unwrap().len(), 7);
    assert_eq!(generate::rated_products(1, 13).unwrap().len(), 13);
    assert_eq!(generate::discount_rating_samples(1, 5).unwrap().len(), 5);
    assert_eq!(
        generate::daily_discounts(1, trend_start(), 90).unwrap().len(),
        90
    );
}

#[test]
fn daily_discounts_cover_consecutive_days() {
    let series = generate::daily_discounts(config::TREND_SEED, trend_start(), 90).unwrap();
    assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(
        series[89].date,
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
    );
    for w in series.windows(2) {
        assert_eq!(w[1].date - w[0].date, chrono::Duration::days(1));
    }
}

#[test]
fn subcategories_come_from_fixed_pool() {
    let products = generate::rated_products(config::RATING_SEED, 1000).unwrap();
    for p in &products {
        let idx: usize = p
            .subcategory
            .strip_prefix("subcat_")
            .and_then(|s| s.parse().ok())
            .unwrap();
        assert!((1..=generate::SUBCATEGORIES).contains(&idx));
    }
}
