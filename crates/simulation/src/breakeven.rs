//! Break-even scan over a cost projection, with optional fractional-year
//! refinement.

use thiserror::Error;

use crate::projection::CostProjection;

/// Solver policy: report the first whole caught-up year, or refine the
/// crossing to a fractional year by linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEvenMode {
    IntegerYear,
    Interpolated,
}

/// Outcome of the break-even scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BreakEvenPoint {
    /// The electric vehicle is already the cheaper option at year 0.
    AtPurchase,
    /// First whole year at which the electric vehicle has caught up.
    AtYear(u32),
    /// Fractional crossing year together with the bracketing integer years.
    Interpolated { years: f64, bracket: (u32, u32) },
    /// Costs never cross within the analysis horizon.
    NotReached,
}

impl BreakEvenPoint {
    /// Crossing expressed in years, when one exists within the horizon.
    pub fn years(&self) -> Option<f64> {
        match self {
            BreakEvenPoint::AtPurchase => Some(0.0),
            BreakEvenPoint::AtYear(year) => Some(f64::from(*year)),
            BreakEvenPoint::Interpolated { years, .. } => Some(*years),
            BreakEvenPoint::NotReached => None,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BreakEvenError {
    /// A sign change was detected but the bracketing slope collapsed to zero.
    #[error("degenerate interpolation between years {y1} and {y2}: zero slope across a sign change")]
    DegenerateInterpolation { y1: u32, y2: u32 },
}

/// Scan the projection for the first year whose difference (combustion minus
/// electric) is non-negative, then report the crossing according to `mode`.
pub fn solve(
    projection: &CostProjection,
    mode: BreakEvenMode,
) -> Result<BreakEvenPoint, BreakEvenError> {
    let records = &projection.records;
    let Some(index) = records.iter().position(|r| r.difference_usd >= 0.0) else {
        return Ok(BreakEvenPoint::NotReached);
    };

    let y2 = records[index].year;
    if index == 0 {
        // No preceding sample exists, so there is nothing to interpolate
        // between; both modes report the first record as-is.
        return Ok(if y2 == 0 {
            BreakEvenPoint::AtPurchase
        } else {
            BreakEvenPoint::AtYear(y2)
        });
    }

    match mode {
        BreakEvenMode::IntegerYear => Ok(BreakEvenPoint::AtYear(y2)),
        BreakEvenMode::Interpolated => {
            let y1 = records[index - 1].year;
            let d1 = records[index - 1].difference_usd;
            let d2 = records[index].difference_usd;
            if y2 <= y1 || d2 == d1 {
                return Err(BreakEvenError::DegenerateInterpolation { y1, y2 });
            }
            let slope = (d2 - d1) / f64::from(y2 - y1);
            let years = f64::from(y2) - d2 / slope;
            Ok(BreakEvenPoint::Interpolated {
                years,
                bracket: (y1, y2),
            })
        }
    }
}
