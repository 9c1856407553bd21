use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Row of the live trading board.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct EquityLive {
    name: String,
    price: Decimal,
    change: Decimal,
    volume: i64,
}

/// Entry of the equity list, price only.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct EquitySummary {
    name: String,
    price: Decimal,
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Equity {
    name: String,
    price: Decimal,
    company: Company,
    capital: Option<Decimal>,
    /// Dividend per share
    dps: Option<Decimal>,
    /// Earnings per share
    eps: Option<Decimal>,
    shares: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Company {
    name: String,
    address: Option<String>,
    #[serde(default)]
    directors: Vec<Director>,
    email: Option<String>,
    facsimile: Option<String>,
    industry: Option<String>,
    sector: Option<String>,
    telephone: Option<String>,
    website: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Director {
    name: String,
    position: Option<String>,
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct MarketSummary {
    /// Unknown when no board symbol has a known share count.
    total_market_cap: Option<Decimal>,
    total_volume: i64,
    total_stocks: usize,
    top_gainers: Vec<EquityLive>,
    top_losers: Vec<EquityLive>,
    last_updated: DateTime<Utc>,
}
