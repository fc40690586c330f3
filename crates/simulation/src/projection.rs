//! Year-by-year cumulative ownership-cost projection.

use payback_core::money::round_to_cents;

/// One row of the projection. Amounts carry full `f64` precision; use
/// [`YearlyCost::rounded`] at presentation boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyCost {
    /// Year index, starting at 0 (purchase).
    pub year: u32,
    /// Cumulative combustion-vehicle cost (USD).
    pub combustion_usd: f64,
    /// Cumulative electric-vehicle cost (USD).
    pub electric_usd: f64,
    /// Signed difference, combustion minus electric (USD).
    pub difference_usd: f64,
}

impl YearlyCost {
    /// Copy of this row with every amount rounded to whole cents.
    pub fn rounded(&self) -> YearlyCost {
        YearlyCost {
            year: self.year,
            combustion_usd: round_to_cents(self.combustion_usd),
            electric_usd: round_to_cents(self.electric_usd),
            difference_usd: round_to_cents(self.difference_usd),
        }
    }
}

/// Ordered projection over the analysis horizon: exactly `horizon + 1`
/// records, year 0 first.
#[derive(Debug, Clone, PartialEq)]
pub struct CostProjection {
    pub records: Vec<YearlyCost>,
}

impl CostProjection {
    /// Number of operating years covered beyond the purchase row.
    pub fn horizon_years(&self) -> u32 {
        self.records.len().saturating_sub(1) as u32
    }
}

/// Inputs for the accumulator: purchase prices and constant annual operating
/// costs, all already converted to USD.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInputs {
    pub combustion_price_usd: f64,
    pub combustion_annual_usd: f64,
    pub electric_price_usd: f64,
    pub electric_annual_usd: f64,
    pub horizon_years: u32,
}

/// Accumulate both cost series over the horizon. Year 0 carries the purchase
/// prices alone; each later year adds one annual operating cost on top of the
/// previous row.
pub fn project(inputs: &ProjectionInputs) -> CostProjection {
    let mut records = Vec::with_capacity(inputs.horizon_years as usize + 1);
    let mut combustion = inputs.combustion_price_usd;
    let mut electric = inputs.electric_price_usd;

    for year in 0..=inputs.horizon_years {
        if year > 0 {
            combustion += inputs.combustion_annual_usd;
            electric += inputs.electric_annual_usd;
        }
        records.push(YearlyCost {
            year,
            combustion_usd: combustion,
            electric_usd: electric,
            difference_usd: combustion - electric,
        });
    }

    CostProjection { records }
}
