use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

use super::PortfolioItem;

/// Valuation of one holding against the current price, if there is one.
///
/// Every price-derived figure is `None` when the price is unknown, so a
/// quote gap never reads as a total loss.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct HoldingStat {
    item: PortfolioItem,
    cost_basis: Decimal,
    current_price: Option<Decimal>,
    current_value: Option<Decimal>,
    gain_loss: Option<Decimal>,
    gain_loss_pct: Option<Decimal>,
}

impl HoldingStat {
    pub fn symbol(&self) -> &str {
        self.item.symbol()
    }

    pub fn is_priced(&self) -> bool {
        self.current_price.is_some()
    }
}
