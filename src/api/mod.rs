pub mod dto;
pub mod snapshot;

pub use dto::QuotePayload;
pub use snapshot::{load_equity_details, load_quote_payload, parse_quote_payload};
