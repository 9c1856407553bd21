use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest known price per symbol. Lookups ignore ASCII case.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(from = "HashMap<String, Decimal>", into = "HashMap<String, Decimal>")]
pub struct PriceMap {
    prices: HashMap<String, Decimal>,
}

impl PriceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: &str, price: Decimal) -> Option<Decimal> {
        self.prices.insert(symbol.trim().to_uppercase(), price)
    }

    pub fn get(&self, symbol: &str) -> Option<Decimal> {
        self.prices.get(&symbol.trim().to_uppercase()).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Decimal)> {
        self.prices.iter()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Decimal)> for PriceMap {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        let mut map = PriceMap::new();
        for (symbol, price) in iter {
            map.insert(symbol.as_ref(), price);
        }
        map
    }
}

impl From<HashMap<String, Decimal>> for PriceMap {
    fn from(prices: HashMap<String, Decimal>) -> Self {
        prices.into_iter().collect()
    }
}

impl From<PriceMap> for HashMap<String, Decimal> {
    fn from(map: PriceMap) -> Self {
        map.prices
    }
}
