use std::io;

use anyhow::Result;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    app::valuation::PortfolioValuation,
    models::{EquityLive, MarketSummary, Projection},
};

const NOT_AVAILABLE: &str = "n/a";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

pub fn render_valuation(valuation: &PortfolioValuation, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(valuation)),
        ReportFormat::Json => render_json(valuation),
        ReportFormat::Csv => {
            let mut buffer = Vec::new();
            write_csv(valuation, &mut buffer)?;
            Ok(String::from_utf8(buffer)?)
        }
    }
}

pub fn render_table(valuation: &PortfolioValuation) -> String {
    let mut lines = vec![
        format!("Portfolio: {}", valuation.portfolio_name()),
        format!(
            "{:<12} {:>10} {:>12} {:>12} {:>14} {:>14} {:>14} {:>10}",
            "Symbol", "Quantity", "Avg. Cost", "Price", "Cost Basis", "Value", "G/L", "G/L %"
        ),
    ];

    lines.extend(valuation.holdings().iter().map(|stat| {
        format!(
            "{:<12} {:>10} {:>12} {:>12} {:>14} {:>14} {:>14} {:>10}",
            stat.symbol(),
            stat.item().quantity(),
            money(stat.item().average_buy_price()),
            optional_money(stat.current_price()),
            money(stat.cost_basis()),
            optional_money(stat.current_value()),
            optional_money(stat.gain_loss()),
            optional_percent(stat.gain_loss_pct()),
        )
    }));

    let totals = valuation.totals();
    let total_value = if *totals.has_any_price() {
        money(totals.total_current_value())
    } else {
        NOT_AVAILABLE.to_string()
    };
    lines.push(String::new());
    lines.push(format!("Total cost basis:    {}", money(totals.total_cost_basis())));
    lines.push(format!("Total value:         {}", total_value));
    lines.push(format!(
        "Total G/L:           {} ({})",
        optional_money(totals.total_gain_loss()),
        optional_percent(totals.total_gain_loss_pct())
    ));

    if *valuation.net_invested() != Decimal::ZERO {
        lines.push(format!("Net invested:        {}", money(valuation.net_invested())));
    }

    if !valuation.is_complete() {
        lines.push(format!(
            "Partial figures: no price for {}",
            valuation.missing_prices().join(", ")
        ));
    }

    to_text(lines)
}

pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn write_csv<W: io::Write>(valuation: &PortfolioValuation, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "symbol",
        "quantity",
        "average_buy_price",
        "current_price",
        "cost_basis",
        "current_value",
        "gain_loss",
        "gain_loss_pct",
    ])?;

    for stat in valuation.holdings() {
        csv_writer.write_record([
            stat.symbol().to_string(),
            stat.item().quantity().to_string(),
            stat.item().average_buy_price().to_string(),
            csv_field(stat.current_price()),
            stat.cost_basis().to_string(),
            csv_field(stat.current_value()),
            csv_field(stat.gain_loss()),
            csv_field(stat.gain_loss_pct()),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn render_projection(projection: &Projection) -> String {
    to_text(vec![
        format!(
            "Simulated value after {} months: {:.2} ({:+.2}%)",
            projection.months(),
            projection.projected_value(),
            projection.growth_pct()
        ),
        format!(
            "Principal {:.2}, monthly rate {:+.4}%",
            projection.principal(),
            projection.monthly_rate() * 100.0
        ),
        String::from("Single random draw for illustration only. This is not a forecast."),
    ])
}

pub fn render_market_summary(summary: &MarketSummary) -> String {
    let mut lines = vec![
        format!(
            "Market as of {}",
            summary.last_updated().format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("Stocks:     {}", summary.total_stocks()),
        format!("Volume:     {}", summary.total_volume()),
    ];

    if let Some(market_cap) = summary.total_market_cap() {
        lines.push(format!("Market cap: {}", money(market_cap)));
    }

    lines.extend(mover_lines("Top gainers", summary.top_gainers()));
    lines.extend(mover_lines("Top losers", summary.top_losers()));
    to_text(lines)
}

fn mover_lines(title: &str, movers: &[EquityLive]) -> Vec<String> {
    let mut lines = vec![format!("{}:", title)];
    if movers.is_empty() {
        lines.push(String::from("  none"));
    }
    lines.extend(movers.iter().map(|quote| {
        format!(
            "  {:<10} {:>10} {:>+10.2}",
            quote.name(),
            money(quote.price()),
            quote.change()
        )
    }));
    lines
}

fn to_text(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn money(value: &Decimal) -> String {
    format!("{:.2}", value)
}

fn optional_money(value: &Option<Decimal>) -> String {
    value.as_ref().map_or_else(|| NOT_AVAILABLE.to_string(), money)
}

fn optional_percent(value: &Option<Decimal>) -> String {
    value
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), |pct| format!("{:.2}%", pct))
}

fn csv_field(value: &Option<Decimal>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
