use std::collections::HashSet;

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PortfolioItem, Transaction};
use crate::errors::ValidationError;

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct Portfolio {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    items: Vec<PortfolioItem>,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Portfolio {
    pub fn item(&self, symbol: &str) -> Option<&PortfolioItem> {
        self.items
            .iter()
            .find(|item| item.symbol().eq_ignore_ascii_case(symbol))
    }

    /// Cash put in by the recorded trades, net of sales proceeds.
    pub fn net_invested(&self) -> Decimal {
        -self
            .transactions
            .iter()
            .fold(Decimal::ZERO, |sum, transaction| sum + transaction.get_amount())
    }

    /// Checks the structural invariants the valuation relies on.
    ///
    /// Zero-quantity holdings are tolerated with a warning since the
    /// portfolio service is expected to drop them itself.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();

        for item in &self.items {
            let symbol = item.symbol().trim();
            if symbol.is_empty() {
                return Err(ValidationError::EmptySymbol);
            }

            if !seen.insert(symbol.to_uppercase()) {
                return Err(ValidationError::DuplicateSymbol(symbol.to_string()));
            }

            if *item.average_buy_price() < Decimal::ZERO {
                return Err(ValidationError::NegativeAverageCost {
                    symbol: symbol.to_string(),
                    price: *item.average_buy_price(),
                });
            }

            if *item.quantity() == 0 {
                warn!(
                    "Holding {} in portfolio '{}' has zero quantity",
                    symbol, self.name
                );
            }
        }

        Ok(())
    }
}
