//! Seeded synthetic dataset generators.
//!
//! Every generator draws from a `StdRng` seeded by the caller, so a given
//! seed always reproduces the same records bit-for-bit. Bounded fields are
//! clipped after sampling (discount to `[0, 50]`, rating to `[1, 5]`).

use crate::error::{Result, ShopstatError};
use crate::models::{DailyDiscount, DiscountObservation, PricePoint, RatedProduct};
use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand_distr::{LogNormal, Normal, Uniform};

/// Number of distinct subcategories (`subcat_1` through `subcat_20`).
pub const SUBCATEGORIES: usize = 20;

/// Generate `n` price/discount observations.
///
/// Prices are log-normal (mu 5.5, sigma 0.6). Discounts fall linearly with
/// price (`20 - 0.003 * price`) plus Gaussian noise (sigma 2), clipped to
/// `[0, 50]` percent.
pub fn price_discount_samples(seed: u64, n: usize) -> Result<Vec<PricePoint>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let price_dist = LogNormal::<f64>::new(5.5, 0.6).map_err(dist_err)?;
    let noise = Normal::<f64>::new(0.0, 2.0).map_err(dist_err)?;

    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let price = price_dist.sample(&mut rng);
        let discount = (20.0 - 0.003 * price + noise.sample(&mut rng)).clamp(0.0, 50.0);
        out.push(PricePoint { price, discount });
    }
    Ok(out)
}

/// Generate `n` rated products spread across the fixed subcategories.
///
/// Subcategories are chosen uniformly, prices are log-normal (mu 3.0,
/// sigma 0.8), and ratings are Gaussian around 4 stars (sigma 0.6) clipped
/// to `[1, 5]`.
pub fn rated_products(seed: u64, n: usize) -> Result<Vec<RatedProduct>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let price_dist = LogNormal::new(3.0, 0.8).map_err(dist_err)?;
    let rating_dist = Normal::<f64>::new(4.0, 0.6).map_err(dist_err)?;

    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let subcategory = format!("subcat_{}", rng.gen_range(1..=SUBCATEGORIES));
        let price = price_dist.sample(&mut rng);
        let rating = rating_dist.sample(&mut rng).clamp(1.0, 5.0);
        out.push(RatedProduct {
            subcategory,
            price,
            rating,
        });
    }
    Ok(out)
}

/// Generate `n` discount/rating observations.
///
/// Discounts are uniform on `[0, 50]`; ratings follow a weak linear response
/// (`3 + 0.01 * discount`) plus unit Gaussian noise, clipped to `[1, 5]`.
pub fn discount_rating_samples(seed: u64, n: usize) -> Result<Vec<DiscountObservation>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let discount_dist = Uniform::new(0.0, 50.0);
    let noise = Normal::<f64>::new(0.0, 1.0).map_err(dist_err)?;

    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let discount = discount_dist.sample(&mut rng);
        let rating = (3.0 + 0.01 * discount + noise.sample(&mut rng)).clamp(1.0, 5.0);
        out.push(DiscountObservation { discount, rating });
    }
    Ok(out)
}

/// Generate a daily discount series of `days` records starting at `start`.
///
/// Each day gets an independent uniform discount on `[5, 30]` percent.
pub fn daily_discounts(seed: u64, start: NaiveDate, days: usize) -> Result<Vec<DailyDiscount>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let discount_dist = Uniform::new(5.0, 30.0);

    let mut out = Vec::with_capacity(days);
    for i in 0..days {
        let date = start + Duration::days(i as i64);
        out.push(DailyDiscount {
            date,
            discount: discount_dist.sample(&mut rng),
        });
    }
    Ok(out)
}

fn dist_err<E: std::fmt::Display>(e: E) -> ShopstatError {
    ShopstatError::InvalidArgument(e.to_string())
}
