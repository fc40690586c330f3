use ev_payback_calculator::simulation::breakeven::{
    BreakEvenError, BreakEvenMode, BreakEvenPoint, solve,
};
use ev_payback_calculator::simulation::projection::{
    CostProjection, ProjectionInputs, YearlyCost, project,
};

fn row(year: u32, combustion_usd: f64, electric_usd: f64) -> YearlyCost {
    YearlyCost {
        year,
        combustion_usd,
        electric_usd,
        difference_usd: combustion_usd - electric_usd,
    }
}

fn scenario(
    combustion_price: f64,
    combustion_annual: f64,
    electric_price: f64,
    electric_annual: f64,
    horizon_years: u32,
) -> CostProjection {
    project(&ProjectionInputs {
        combustion_price_usd: combustion_price,
        combustion_annual_usd: combustion_annual,
        electric_price_usd: electric_price,
        electric_annual_usd: electric_annual,
        horizon_years,
    })
}

#[test]
fn mid_horizon_crossing_reports_first_caught_up_year() {
    // Difference(year) = 1500 * year - 10000, first non-negative at year 7.
    let projection = scenario(20_000.0, 2_000.0, 30_000.0, 500.0, 10);
    let point = solve(&projection, BreakEvenMode::IntegerYear).expect("integer solve");
    assert_eq!(point, BreakEvenPoint::AtYear(7));
}

#[test]
fn mid_horizon_crossing_interpolates_fractional_year() {
    let projection = scenario(20_000.0, 2_000.0, 30_000.0, 500.0, 10);
    let point = solve(&projection, BreakEvenMode::Interpolated).expect("interpolated solve");
    match point {
        BreakEvenPoint::Interpolated { years, bracket } => {
            assert!((years - 20.0 / 3.0).abs() < 1e-9, "years = {}", years);
            assert_eq!(bracket, (6, 7));
        }
        other => panic!("expected interpolated crossing, got {:?}", other),
    }
}

#[test]
fn modes_agree_on_the_bracketing_year() {
    let projection = scenario(20_000.0, 2_000.0, 30_000.0, 500.0, 10);
    let integer = solve(&projection, BreakEvenMode::IntegerYear).expect("integer solve");
    let refined = solve(&projection, BreakEvenMode::Interpolated).expect("interpolated solve");

    let whole_year = match integer {
        BreakEvenPoint::AtYear(year) => year,
        other => panic!("expected whole-year crossing, got {:?}", other),
    };
    match refined {
        BreakEvenPoint::Interpolated { years, bracket } => {
            assert_eq!(bracket, (whole_year - 1, whole_year));
            assert!(years >= f64::from(whole_year - 1) && years <= f64::from(whole_year));
        }
        other => panic!("expected interpolated crossing, got {:?}", other),
    }
}

#[test]
fn cheaper_electric_at_purchase_reports_year_zero_in_both_modes() {
    let projection = scenario(20_000.0, 2_000.0, 15_000.0, 500.0, 10);
    for mode in [BreakEvenMode::IntegerYear, BreakEvenMode::Interpolated] {
        let point = solve(&projection, mode).expect("solve");
        assert_eq!(point, BreakEvenPoint::AtPurchase);
        assert_eq!(point.years(), Some(0.0));
    }
}

#[test]
fn no_crossing_within_horizon_reports_not_reached() {
    // Combustion is cheaper to buy and cheaper to run.
    let projection = scenario(15_000.0, 400.0, 30_000.0, 500.0, 15);
    for mode in [BreakEvenMode::IntegerYear, BreakEvenMode::Interpolated] {
        let point = solve(&projection, mode).expect("solve");
        assert_eq!(point, BreakEvenPoint::NotReached);
        assert_eq!(point.years(), None);
    }
}

#[test]
fn crossing_exactly_at_final_year_is_detected() {
    // Difference(year) = 500 * year - 5000 reaches zero at the horizon edge.
    let projection = scenario(20_000.0, 1_000.0, 25_000.0, 500.0, 10);
    let integer = solve(&projection, BreakEvenMode::IntegerYear).expect("integer solve");
    assert_eq!(integer, BreakEvenPoint::AtYear(10));

    let refined = solve(&projection, BreakEvenMode::Interpolated).expect("interpolated solve");
    match refined {
        BreakEvenPoint::Interpolated { years, bracket } => {
            assert!((years - 10.0).abs() < 1e-9, "years = {}", years);
            assert_eq!(bracket, (9, 10));
        }
        other => panic!("expected interpolated crossing, got {:?}", other),
    }
}

#[test]
fn duplicate_year_rows_report_a_degenerate_bracket() {
    // Re-imported series can carry repeated year stamps; the refinement has
    // no year span to divide by and must refuse rather than divide by zero.
    let projection = CostProjection {
        records: vec![row(1, 20_000.0, 20_100.0), row(1, 20_000.0, 19_950.0)],
    };
    let err = solve(&projection, BreakEvenMode::Interpolated).expect_err("degenerate bracket");
    assert_eq!(err, BreakEvenError::DegenerateInterpolation { y1: 1, y2: 1 });

    // The whole-year reading is still well defined.
    let integer = solve(&projection, BreakEvenMode::IntegerYear).expect("integer solve");
    assert_eq!(integer, BreakEvenPoint::AtYear(1));
}

#[test]
fn series_opening_in_the_caught_up_state_reports_its_first_year() {
    // A truncated series may begin after the crossing already happened.
    let projection = CostProjection {
        records: vec![row(3, 26_000.0, 25_500.0), row(4, 28_000.0, 26_000.0)],
    };
    for mode in [BreakEvenMode::IntegerYear, BreakEvenMode::Interpolated] {
        let point = solve(&projection, mode).expect("solve");
        assert_eq!(point, BreakEvenPoint::AtYear(3));
    }
}

#[test]
fn single_year_horizon_still_brackets_the_crossing() {
    // Crosses between the purchase and the first operating year.
    let projection = scenario(20_000.0, 3_000.0, 21_000.0, 500.0, 1);
    let integer = solve(&projection, BreakEvenMode::IntegerYear).expect("integer solve");
    assert_eq!(integer, BreakEvenPoint::AtYear(1));

    let refined = solve(&projection, BreakEvenMode::Interpolated).expect("interpolated solve");
    match refined {
        BreakEvenPoint::Interpolated { years, bracket } => {
            assert_eq!(bracket, (0, 1));
            assert!((years - 0.4).abs() < 1e-9, "years = {}", years);
        }
        other => panic!("expected interpolated crossing, got {:?}", other),
    }
}
