pub mod holding_stat;
pub mod portfolio;
pub mod portfolio_item;
pub mod portfolio_totals;
pub mod price_map;
pub mod projection;
pub mod quote;
pub mod transaction;

pub use holding_stat::HoldingStat;
pub use portfolio::Portfolio;
pub use portfolio_item::PortfolioItem;
pub use portfolio_totals::PortfolioTotals;
pub use price_map::PriceMap;
pub use projection::Projection;
pub use quote::{Company, Director, Equity, EquityLive, EquitySummary, MarketSummary};
pub use transaction::{Transaction, TransactionType};
