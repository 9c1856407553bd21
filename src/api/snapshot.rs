use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;

use super::dto::QuotePayload;
use crate::models::Equity;

pub fn parse_quote_payload(text: &str) -> Result<QuotePayload> {
    serde_json::from_str(text).context(
        "Unexpected quote snapshot: expected a live board, an equity list or an equity detail",
    )
}

pub fn load_quote_payload(path: &Path) -> Result<QuotePayload> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read quote snapshot at path: {}", path.display()))?;
    let payload = parse_quote_payload(&text)
        .with_context(|| format!("Invalid quote snapshot at path: {}", path.display()))?;

    info!("Loaded quote snapshot from {}", path.display());
    Ok(payload)
}

/// Loads one equity detail snapshot per path.
pub fn load_equity_details<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Equity>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            load_quote_payload(path)?.into_equity().with_context(|| {
                format!("Expected an equity detail snapshot at path: {}", path.display())
            })
        })
        .collect()
}
