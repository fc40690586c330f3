//! Catalog and market-rate models and loaders for the EV Payback Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use payback_core::constants;

/// Vehicle record parsed from catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct VehicleConfig {
    pub brand: String,
    pub model: String,
    /// Purchase price quoted in the reference currency (USD), tax included.
    pub price_usd: f64,
    pub powertrain: PowertrainConfig,
}

impl VehicleConfig {
    /// Display name used for selection and reporting: trimmed brand and model,
    /// space-joined.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand.trim(), self.model.trim())
    }
}

/// Powertrain description in catalog files. The consumption field carried by
/// each variant is the one meaningful for that class.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum PowertrainConfig {
    #[serde(rename = "combustion")]
    Combustion {
        /// Fuel economy in kilometres per litre.
        km_per_liter: f64,
    },
    #[serde(rename = "electric")]
    Electric {
        /// Energy use in kilowatt-hours per kilometre.
        kwh_per_km: f64,
    },
    #[serde(other)]
    Unsupported,
}

/// Market rates applied to recurring operating costs. Local prices are in PEN;
/// catalog purchase prices are already USD, so only recurring costs go through
/// the exchange rate.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct MarketRates {
    /// Exchange rate in PEN per USD.
    #[serde(default = "default_exchange_rate")]
    pub exchange_rate_pen_per_usd: f64,
    /// Gasoline price in PEN per gallon.
    #[serde(default = "default_gasoline_price")]
    pub gasoline_price_pen_per_gallon: f64,
    /// Electricity price in PEN per kWh.
    #[serde(default = "default_electricity_price")]
    pub electricity_price_pen_per_kwh: f64,
}

impl Default for MarketRates {
    fn default() -> Self {
        Self {
            exchange_rate_pen_per_usd: default_exchange_rate(),
            gasoline_price_pen_per_gallon: default_gasoline_price(),
            electricity_price_pen_per_kwh: default_electricity_price(),
        }
    }
}

fn default_exchange_rate() -> f64 {
    constants::DEFAULT_EXCHANGE_RATE_PEN_PER_USD
}

fn default_gasoline_price() -> f64 {
    constants::DEFAULT_GASOLINE_PRICE_PEN_PER_GALLON
}

fn default_electricity_price() -> f64 {
    constants::DEFAULT_ELECTRICITY_PRICE_PEN_PER_KWH
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load vehicle records from a YAML list file, a single-record TOML file, or a
/// directory of TOML files.
pub fn load_vehicle_configs<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleConfig>, ConfigError> {
    load_records(path)
}

/// Load market rates from a TOML file. Missing keys fall back to the
/// documented defaults via serde field defaults.
pub fn load_market_rates<P: AsRef<Path>>(path: P) -> Result<MarketRates, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let rates: MarketRates = toml::from_str(&contents)?;
    Ok(rates)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
