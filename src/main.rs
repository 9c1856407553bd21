use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use rust_decimal::prelude::ToPrimitive;

use portfolio_valuation::{
    api::{load_equity_details, load_quote_payload},
    app::{
        ReportFormat, report, simulate, summarize_market, utils::load_portfolio, valuate_portfolio,
    },
    config::Config,
    models::{PriceMap, Projection},
};

#[derive(Debug, Parser)]
#[command(name = "portfolio-valuation", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Value a portfolio against a quote snapshot
    Value {
        #[arg(long)]
        portfolio: Option<String>,
        #[arg(long)]
        quotes: Option<String>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },
    /// Run one toy growth projection for a principal
    Simulate {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        months: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run one toy growth projection on a portfolio's current value
    Project {
        #[arg(long)]
        portfolio: Option<String>,
        #[arg(long)]
        quotes: Option<String>,
        #[arg(long)]
        months: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarize the live trading board
    Market {
        #[arg(long)]
        quotes: Option<String>,
        /// Equity detail snapshots supplying share counts for market cap
        #[arg(long = "equities", num_args = 1..)]
        equities: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::from_env();
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Command::Value {
            portfolio,
            quotes,
            format,
        } => {
            let config = config
                .with_portfolio_path(portfolio)
                .with_quotes_path(quotes);
            let portfolio = load_portfolio(&required(config.portfolio_path(), "PORTFOLIO_PATH")?)?;
            let prices = load_prices(&config)?;

            let valuation = valuate_portfolio(&portfolio, &prices);
            print!("{}", report::render_valuation(&valuation, format)?);
        }
        Command::Simulate {
            principal,
            months,
            seed,
        } => {
            let config = config
                .with_projection_months(months)
                .with_simulation_seed(seed);
            let projection = run_simulation(principal, &config);
            print!("{}", report::render_projection(&projection));
        }
        Command::Project {
            portfolio,
            quotes,
            months,
            seed,
        } => {
            let config = config
                .with_portfolio_path(portfolio)
                .with_quotes_path(quotes)
                .with_projection_months(months)
                .with_simulation_seed(seed);
            let portfolio = load_portfolio(&required(config.portfolio_path(), "PORTFOLIO_PATH")?)?;
            let prices = load_prices(&config)?;

            let valuation = valuate_portfolio(&portfolio, &prices);
            if !*valuation.totals().has_any_price() {
                anyhow::bail!("No prices available for portfolio '{}'", portfolio.name());
            }

            let principal = valuation
                .totals()
                .total_current_value()
                .to_f64()
                .with_context(|| "Failed to convert portfolio value to f64")?;
            let projection = run_simulation(principal, &config);
            print!("{}", report::render_projection(&projection));
        }
        Command::Market { quotes, equities } => {
            let config = config
                .with_quotes_path(quotes)
                .with_equities_paths(equities);
            let payload = load_quote_payload(&required(config.quotes_path(), "QUOTES_PATH")?)?;
            let live = payload
                .live()
                .with_context(|| "Market summary needs a live board snapshot")?;

            let equities = load_equity_details(config.equities_paths().as_slice())?;
            if equities.is_empty() {
                info!("No equity details given, market cap is left out");
            }

            let summary = summarize_market(live, &equities, Utc::now());
            print!("{}", report::render_market_summary(&summary));
        }
    }

    Ok(())
}

fn required(path: &Option<PathBuf>, variable: &str) -> Result<PathBuf> {
    path.clone()
        .with_context(|| format!("Missing path: pass it as a flag or set {}", variable))
}

fn load_prices(config: &Config) -> Result<PriceMap> {
    let payload = load_quote_payload(&required(config.quotes_path(), "QUOTES_PATH")?)?;
    let prices = payload.into_price_map();
    info!("Price snapshot covers {} symbols", prices.len());
    Ok(prices)
}

fn run_simulation(principal: f64, config: &Config) -> Projection {
    let months = *config.projection_months();
    match config.simulation_seed() {
        Some(seed) => simulate(principal, months, &mut StdRng::seed_from_u64(*seed)),
        None => simulate(principal, months, &mut rand::thread_rng()),
    }
}
