use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Equity, EquityLive, MarketSummary};

pub const TOP_MOVERS: usize = 5;

/// Builds the market overview from the live board.
///
/// Market cap only covers symbols whose equity detail, with a share count,
/// is present in `equities`; it is unknown when none is.
pub fn summarize_market(
    live: &[EquityLive],
    equities: &[Equity],
    as_of: DateTime<Utc>,
) -> MarketSummary {
    let shares: HashMap<String, i64> = equities
        .iter()
        .filter_map(|equity| {
            equity
                .shares()
                .map(|shares| (equity.name().to_uppercase(), shares))
        })
        .collect();

    let mut total_market_cap: Option<Decimal> = None;
    let mut total_volume = 0i64;
    let mut top_gainers = Vec::new();
    let mut top_losers = Vec::new();

    for quote in live {
        total_volume = total_volume.saturating_add(*quote.volume());

        if let Some(shares) = shares.get(&quote.name().to_uppercase()) {
            let market_cap = quote.price().saturating_mul(Decimal::from(*shares));
            total_market_cap = Some(
                total_market_cap
                    .unwrap_or(Decimal::ZERO)
                    .saturating_add(market_cap),
            );
        }

        if *quote.change() > Decimal::ZERO {
            top_gainers.push(quote.clone());
        } else if *quote.change() < Decimal::ZERO {
            top_losers.push(quote.clone());
        }
    }

    top_gainers.sort_by(|a, b| b.change().cmp(a.change()));
    top_losers.sort_by(|a, b| a.change().cmp(b.change()));
    top_gainers.truncate(TOP_MOVERS);
    top_losers.truncate(TOP_MOVERS);

    MarketSummary::new(
        total_market_cap,
        total_volume,
        live.len(),
        top_gainers,
        top_losers,
        as_of,
    )
}
