use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;

use crate::models::Portfolio;

pub fn parse_portfolio(text: &str) -> Result<Portfolio> {
    let portfolio: Portfolio =
        serde_json::from_str(text).context("Failed to parse portfolio document")?;
    portfolio
        .validate()
        .with_context(|| format!("Invalid portfolio '{}'", portfolio.name()))?;

    Ok(portfolio)
}

pub fn load_portfolio(path: &Path) -> Result<Portfolio> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to open portfolio file at path: {}", path.display()))?;
    let portfolio = parse_portfolio(&text)
        .with_context(|| format!("Failed to load portfolio from {}", path.display()))?;

    info!(
        "Loaded portfolio '{}' with {} holdings and {} transactions",
        portfolio.name(),
        portfolio.items().len(),
        portfolio.transactions().len()
    );
    Ok(portfolio)
}
