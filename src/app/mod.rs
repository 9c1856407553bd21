pub mod calc;
pub mod market;
pub mod report;
pub mod simulator;
pub mod utils;
pub mod valuation;

pub use calc::{aggregate, valuate};
pub use market::summarize_market;
pub use report::ReportFormat;
pub use simulator::simulate;
pub use valuation::{PortfolioValuation, valuate_portfolio};
