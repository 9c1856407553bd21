use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// Outcome of a single growth simulation. Not a forecast.
#[derive(Clone, Copy, Debug, Getters, PartialEq, Serialize, new)]
pub struct Projection {
    principal: f64,
    months: u32,
    monthly_rate: f64,
    projected_value: f64,
    growth_pct: f64,
}
