use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct Transaction {
    id: String,
    symbol: String,
    transaction_type: TransactionType,
    quantity: u64,
    price_per_share: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Cash moved by the trade, negative for buys.
    pub fn get_amount(&self) -> Decimal {
        let amount = self.price_per_share * Decimal::from(self.quantity);
        match self.transaction_type {
            TransactionType::Buy => -amount,
            TransactionType::Sell => amount,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
pub enum TransactionType {
    Buy,
    Sell,
}
