//! Simulation core: vehicle profiles, operating-cost rates, cumulative cost
//! projection, and the break-even solver.
//!
//! [`simulate`] chains the three stages. Every run is a pure function of its
//! request; no state is carried between invocations.

pub mod breakeven;
pub mod projection;
pub mod rates;
pub mod vehicle;

pub use breakeven::{BreakEvenError, BreakEvenMode, BreakEvenPoint};
pub use projection::{CostProjection, ProjectionInputs, YearlyCost};
pub use rates::{InputError, annual_cost_combustion, annual_cost_electric};
pub use vehicle::{Powertrain, VehicleClass, VehicleError, VehicleProfile};

use payback_config::MarketRates;
use payback_core::constants::ELECTRIC_INCENTIVE_FACTOR;

/// Usage assumptions for one simulation run.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParameters {
    /// Distance driven per year (km).
    pub annual_km: f64,
    /// Analysis horizon in whole years, at least 1.
    pub horizon_years: u32,
    /// Apply the electric-vehicle purchase incentive to the sticker price.
    pub electric_incentive: bool,
}

/// Inputs necessary to project both cost curves and locate their crossing.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    pub combustion: VehicleProfile,
    pub electric: VehicleProfile,
    pub rates: MarketRates,
    pub parameters: SimulationParameters,
    pub mode: BreakEvenMode,
}

/// Result of one run: the full projection, the break-even verdict, and the
/// annual operating costs that drove the curves.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub projection: CostProjection,
    pub break_even: BreakEvenPoint,
    pub combustion_annual_usd: f64,
    pub electric_annual_usd: f64,
}

/// Top-level simulation error.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("the {slot} slot holds a {found} vehicle")]
    ClassMismatch {
        slot: &'static str,
        found: &'static str,
    },
    #[error("break-even refinement failed: {0}")]
    BreakEven(#[from] BreakEvenError),
}

fn combustion_rate(profile: &VehicleProfile) -> Result<f64, SimulationError> {
    match profile.powertrain {
        Powertrain::Combustion { km_per_liter } => Ok(km_per_liter),
        Powertrain::Electric { .. } => Err(SimulationError::ClassMismatch {
            slot: "combustion",
            found: profile.powertrain.class().label(),
        }),
    }
}

fn electric_rate(profile: &VehicleProfile) -> Result<f64, SimulationError> {
    match profile.powertrain {
        Powertrain::Electric { kwh_per_km } => Ok(kwh_per_km),
        Powertrain::Combustion { .. } => Err(SimulationError::ClassMismatch {
            slot: "electric",
            found: profile.powertrain.class().label(),
        }),
    }
}

/// Run the three-stage pipeline: rate conversion, cost accumulation, and the
/// break-even scan.
///
/// All inputs are validated before any projection row is produced, so a
/// returned error implies no partial output.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationOutcome, SimulationError> {
    let params = &request.parameters;
    if params.horizon_years == 0 {
        return Err(SimulationError::InvalidInput(InputError::ZeroHorizon));
    }
    rates::require_positive("annual distance (km)", params.annual_km)?;
    rates::require_non_negative(
        "combustion purchase price (USD)",
        request.combustion.price_usd,
    )?;
    rates::require_non_negative("electric purchase price (USD)", request.electric.price_usd)?;

    let km_per_liter = combustion_rate(&request.combustion)?;
    let kwh_per_km = electric_rate(&request.electric)?;

    let combustion_annual_usd =
        rates::annual_cost_combustion(params.annual_km, km_per_liter, &request.rates)?;
    let electric_annual_usd =
        rates::annual_cost_electric(params.annual_km, kwh_per_km, &request.rates)?;

    let electric_price_usd = if params.electric_incentive {
        request.electric.price_usd * ELECTRIC_INCENTIVE_FACTOR
    } else {
        request.electric.price_usd
    };

    let projection = projection::project(&ProjectionInputs {
        combustion_price_usd: request.combustion.price_usd,
        combustion_annual_usd,
        electric_price_usd,
        electric_annual_usd,
        horizon_years: params.horizon_years,
    });
    let break_even = breakeven::solve(&projection, request.mode)?;

    Ok(SimulationOutcome {
        projection,
        break_even,
        combustion_annual_usd,
        electric_annual_usd,
    })
}
