use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, Serialize, new)]
pub struct PortfolioTotals {
    total_cost_basis: Decimal,
    total_current_value: Decimal,
    total_gain_loss: Option<Decimal>,
    total_gain_loss_pct: Option<Decimal>,
    /// Separates "no gain" from "no price data at all".
    has_any_price: bool,
}
