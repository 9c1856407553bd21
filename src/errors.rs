use rust_decimal::Decimal;
use thiserror::Error;

/// Structural problems in a loaded portfolio.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Holding with an empty symbol")]
    EmptySymbol,
    #[error("Duplicate holding for symbol {0}")]
    DuplicateSymbol(String),
    #[error("Negative average buy price {price} for symbol {symbol}")]
    NegativeAverageCost { symbol: String, price: Decimal },
}
