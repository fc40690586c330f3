//! Annual operating-cost estimators for each drive class.
//!
//! Both estimators convert a consumption rating and a yearly distance into a
//! USD figure using market rates quoted in PEN. They are pure and keep full
//! `f64` precision; rounding belongs to the presentation layer.

use payback_config::MarketRates;
use payback_core::constants::LITERS_PER_GALLON;
use thiserror::Error;

/// Invalid numeric input detected before any projection is produced.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be a positive finite number (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be a non-negative finite number (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("analysis horizon must cover at least one year")]
    ZeroHorizon,
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NonPositive { field, value })
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InputError::Negative { field, value })
    }
}

/// Annual fuel cost in USD for a combustion vehicle.
///
/// Inputs:
/// - `annual_km`: distance driven per year (km)
/// - `km_per_liter`: fuel economy rating (km/l)
/// - `rates`: market rates; uses the gasoline price (PEN/gal) and exchange rate (PEN/USD)
pub fn annual_cost_combustion(
    annual_km: f64,
    km_per_liter: f64,
    rates: &MarketRates,
) -> Result<f64, InputError> {
    let annual_km = require_non_negative("annual distance (km)", annual_km)?;
    let km_per_liter = require_positive("fuel economy (km/l)", km_per_liter)?;
    let gasoline = require_positive(
        "gasoline price (PEN/gal)",
        rates.gasoline_price_pen_per_gallon,
    )?;
    let exchange = require_positive("exchange rate (PEN/USD)", rates.exchange_rate_pen_per_usd)?;

    let liters_per_year = annual_km / km_per_liter;
    let price_pen_per_liter = gasoline / LITERS_PER_GALLON;
    Ok(liters_per_year * price_pen_per_liter / exchange)
}

/// Annual charging cost in USD for an electric vehicle.
///
/// Inputs:
/// - `annual_km`: distance driven per year (km)
/// - `kwh_per_km`: energy use rating (kWh/km)
/// - `rates`: market rates; uses the electricity price (PEN/kWh) and exchange rate (PEN/USD)
pub fn annual_cost_electric(
    annual_km: f64,
    kwh_per_km: f64,
    rates: &MarketRates,
) -> Result<f64, InputError> {
    let annual_km = require_non_negative("annual distance (km)", annual_km)?;
    let kwh_per_km = require_positive("energy use (kWh/km)", kwh_per_km)?;
    let electricity = require_positive(
        "electricity price (PEN/kWh)",
        rates.electricity_price_pen_per_kwh,
    )?;
    let exchange = require_positive("exchange rate (PEN/USD)", rates.exchange_rate_pen_per_usd)?;

    Ok(annual_km * kwh_per_km * electricity / exchange)
}
