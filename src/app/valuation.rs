use derive_getters::Getters;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    app::calc::{aggregate, valuate},
    models::{HoldingStat, Portfolio, PortfolioTotals, PriceMap},
};

/// Per-holding figures and totals for one portfolio at one price snapshot.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct PortfolioValuation {
    portfolio_id: String,
    portfolio_name: String,
    holdings: Vec<HoldingStat>,
    totals: PortfolioTotals,
    missing_prices: Vec<String>,
    net_invested: Decimal,
}

impl PortfolioValuation {
    /// True when every holding had a price.
    pub fn is_complete(&self) -> bool {
        self.missing_prices.is_empty()
    }
}

pub fn valuate_portfolio(portfolio: &Portfolio, prices: &PriceMap) -> PortfolioValuation {
    let holdings: Vec<HoldingStat> = portfolio
        .items()
        .iter()
        .map(|item| valuate(item, prices.get(item.symbol())))
        .collect();

    let missing_prices: Vec<String> = holdings
        .iter()
        .filter(|stat| !stat.is_priced())
        .map(|stat| stat.symbol().to_string())
        .collect();

    if !missing_prices.is_empty() {
        debug!(
            "No price for {} of {} holdings in '{}': {}",
            missing_prices.len(),
            holdings.len(),
            portfolio.name(),
            missing_prices.join(", ")
        );
    }

    let totals = aggregate(&holdings);

    PortfolioValuation {
        portfolio_id: portfolio.id().clone(),
        portfolio_name: portfolio.name().clone(),
        holdings,
        totals,
        missing_prices,
        net_invested: portfolio.net_invested(),
    }
}
