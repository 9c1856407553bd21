use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Equity, EquityLive, EquitySummary, PriceMap};

/// The market-data response shapes a price snapshot can arrive in.
///
/// Variants are tried in order, so a board row (which also carries `change`
/// and `volume`) is never mistaken for a bare list entry. An empty array has
/// no distinguishing rows and decodes as an empty live board.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum QuotePayload {
    /// Live trading board.
    Live(Vec<EquityLive>),
    /// Equity list with last prices only.
    Summaries(Vec<EquitySummary>),
    /// Detail page of a single equity.
    Detail(Box<Equity>),
}

impl QuotePayload {
    pub fn live(&self) -> Option<&[EquityLive]> {
        match self {
            QuotePayload::Live(rows) => Some(rows.as_slice()),
            QuotePayload::Summaries(_) | QuotePayload::Detail(_) => None,
        }
    }

    pub fn into_equity(self) -> Option<Equity> {
        match self {
            QuotePayload::Detail(equity) => Some(*equity),
            QuotePayload::Live(_) | QuotePayload::Summaries(_) => None,
        }
    }

    /// Collects the price of every quoted symbol.
    ///
    /// Negative prices are dropped so those symbols value as unknown.
    pub fn into_price_map(self) -> PriceMap {
        let quotes: Vec<(String, Decimal)> = match self {
            QuotePayload::Live(rows) => rows
                .into_iter()
                .map(|row| (row.name().clone(), *row.price()))
                .collect(),
            QuotePayload::Summaries(rows) => rows
                .into_iter()
                .map(|row| (row.name().clone(), *row.price()))
                .collect(),
            QuotePayload::Detail(equity) => vec![(equity.name().clone(), *equity.price())],
        };

        quotes
            .into_iter()
            .filter(|(symbol, price)| {
                if *price < Decimal::ZERO {
                    warn!("Ignoring negative price {} for {}", price, symbol);
                    return false;
                }
                true
            })
            .collect()
    }
}
