use std::{env, path::PathBuf, str::FromStr};

use derive_getters::Getters;
use log::warn;

pub const DEFAULT_PROJECTION_MONTHS: u32 = 12;

/// Settings read from the environment, optionally seeded from a `.env` file.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Config {
    portfolio_path: Option<PathBuf>,
    quotes_path: Option<PathBuf>,
    equities_paths: Vec<PathBuf>,
    projection_months: u32,
    simulation_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portfolio_path: None,
            quotes_path: None,
            equities_paths: Vec::new(),
            projection_months: DEFAULT_PROJECTION_MONTHS,
            simulation_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        if let Err(err) = dotenv::dotenv() {
            if !err.not_found() {
                warn!("Failed to load .env file: {}", err);
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            portfolio_path: lookup("PORTFOLIO_PATH").map(|path| expand_path(&path)),
            quotes_path: lookup("QUOTES_PATH").map(|path| expand_path(&path)),
            equities_paths: lookup("EQUITIES_PATHS")
                .map(|paths| {
                    paths
                        .split(',')
                        .map(str::trim)
                        .filter(|path| !path.is_empty())
                        .map(expand_path)
                        .collect()
                })
                .unwrap_or_default(),
            projection_months: parse_var(&lookup, "PROJECTION_MONTHS")
                .unwrap_or(defaults.projection_months),
            simulation_seed: parse_var(&lookup, "SIMULATION_SEED"),
        }
    }

    pub fn with_portfolio_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.portfolio_path = Some(expand_path(&path));
        }
        self
    }

    pub fn with_quotes_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.quotes_path = Some(expand_path(&path));
        }
        self
    }

    pub fn with_equities_paths(mut self, paths: Vec<String>) -> Self {
        if !paths.is_empty() {
            self.equities_paths = paths.iter().map(|path| expand_path(path)).collect();
        }
        self
    }

    pub fn with_projection_months(mut self, months: Option<u32>) -> Self {
        if let Some(months) = months {
            self.projection_months = months;
        }
        self
    }

    pub fn with_simulation_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.simulation_seed = seed;
        }
        self
    }
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: cannot parse '{}'", key, raw);
            None
        }
    }
}
