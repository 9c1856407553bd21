use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net position in one symbol, as maintained by the portfolio service.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct PortfolioItem {
    symbol: String,
    quantity: u64,
    average_buy_price: Decimal,
}
