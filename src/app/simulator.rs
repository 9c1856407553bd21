//! Toy growth projection.
//!
//! A single annual rate is drawn uniformly from [`MIN_ANNUAL_RATE`,
//! `MAX_ANNUAL_RATE`], spread evenly over twelve months and compounded for
//! the whole horizon. There is no volatility, no re-sampling and no market
//! model behind it: the result is one arbitrary path and must never be shown
//! as a forecast.

use rand::Rng;

use crate::models::Projection;

pub const MIN_ANNUAL_RATE: f64 = -0.10;
pub const MAX_ANNUAL_RATE: f64 = 0.20;

const MONTHS_PER_YEAR: f64 = 12.0;

pub fn draw_monthly_rate<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(MIN_ANNUAL_RATE..=MAX_ANNUAL_RATE) / MONTHS_PER_YEAR
}

/// Compounds `principal` at a fixed `monthly_rate`.
///
/// Inputs are not validated. A zero principal reports zero growth.
pub fn project(principal: f64, months: u32, monthly_rate: f64) -> Projection {
    let projected_value = principal * (1.0 + monthly_rate).powf(f64::from(months));
    let growth_pct = if principal == 0.0 {
        0.0
    } else {
        (projected_value - principal) / principal * 100.0
    };

    Projection::new(principal, months, monthly_rate, projected_value, growth_pct)
}

/// Runs one random projection using `rng` for the rate draw.
pub fn simulate<R: Rng + ?Sized>(principal: f64, months: u32, rng: &mut R) -> Projection {
    let monthly_rate = draw_monthly_rate(rng);
    project(principal, months, monthly_rate)
}
