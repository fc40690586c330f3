use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use ev_payback_calculator::config::{self, MarketRates, PowertrainConfig, VehicleConfig};
use ev_payback_calculator::constants::ELECTRIC_INCENTIVE_FACTOR;
use ev_payback_calculator::export::projection as export_projection;
use ev_payback_calculator::export::summary as export_summary;
use ev_payback_calculator::money::format_usd;
use ev_payback_calculator::simulation::vehicle;
use ev_payback_calculator::simulation::{
    self, BreakEvenMode, BreakEvenPoint, SimulationOutcome, SimulationParameters,
    SimulationRequest, VehicleClass,
};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Ownership-cost break-even calculator (combustion vs electric)"
)]
struct Cli {
    /// Combustion vehicle name from the catalog (case-insensitive, defaults to first entry)
    #[arg(long)]
    combustion: Option<String>,

    /// Electric vehicle name from the catalog (case-insensitive, defaults to first entry)
    #[arg(long)]
    electric: Option<String>,

    /// Distance driven per year in km (5000-40000)
    #[arg(long, default_value_t = 15_000.0)]
    annual_km: f64,

    /// Analysis horizon in years (1-15)
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Apply the 18% electric-vehicle purchase incentive
    #[arg(long, default_value_t = false)]
    incentive: bool,

    /// Break-even reporting mode
    #[arg(long, value_enum, default_value_t = Mode::Interpolated)]
    mode: Mode,

    /// Vehicle catalog path (YAML list, TOML file, or directory of TOML files)
    #[arg(long, default_value = "configs/vehicles.yaml")]
    catalog: PathBuf,

    /// Market rates TOML path (defaults to configs/market.toml when present)
    #[arg(long)]
    market: Option<PathBuf>,

    /// Projection CSV file (use '-' for stdout); file outputs also get a JSON summary sidecar
    #[arg(long)]
    output: Option<PathBuf>,

    /// List the catalog split by drive class and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Mode {
    Integer,
    Interpolated,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = config::load_vehicle_configs(&cli.catalog)?;

    if cli.list {
        print_catalog(&catalog);
        return Ok(());
    }

    if !(5_000.0..=40_000.0).contains(&cli.annual_km) {
        return Err(anyhow!(
            "--annual-km must be between 5000 and 40000 (got {})",
            cli.annual_km
        ));
    }
    if !(1..=15).contains(&cli.years) {
        return Err(anyhow!("--years must be between 1 and 15 (got {})", cli.years));
    }

    let rates = load_rates(cli.market.as_deref())?;
    let combustion = vehicle::select(&catalog, VehicleClass::Combustion, cli.combustion.as_deref())?;
    let electric = vehicle::select(&catalog, VehicleClass::Electric, cli.electric.as_deref())?;

    let request = SimulationRequest {
        combustion,
        electric,
        rates,
        parameters: SimulationParameters {
            annual_km: cli.annual_km,
            horizon_years: cli.years,
            electric_incentive: cli.incentive,
        },
        mode: match cli.mode {
            Mode::Integer => BreakEvenMode::IntegerYear,
            Mode::Interpolated => BreakEvenMode::Interpolated,
        },
    };

    let outcome = simulation::simulate(&request)?;
    print_report(&request, &outcome);

    if let Some(output) = &cli.output {
        export_artifacts(output, &request, &outcome)?;
    }

    Ok(())
}

fn load_rates(path: Option<&Path>) -> anyhow::Result<MarketRates> {
    match path {
        Some(path) => Ok(config::load_market_rates(path)?),
        None => {
            let default_path = Path::new("configs/market.toml");
            if default_path.exists() {
                Ok(config::load_market_rates(default_path)?)
            } else {
                eprintln!("note: configs/market.toml not found, using built-in market rates");
                Ok(MarketRates::default())
            }
        }
    }
}

fn print_catalog(catalog: &[VehicleConfig]) {
    println!("=== Vehicle Catalog ===");
    println!("Combustion:");
    for cfg in catalog {
        if let PowertrainConfig::Combustion { km_per_liter } = &cfg.powertrain {
            println!(
                "  {} (USD {}, {:.1} km/l)",
                cfg.display_name(),
                format_usd(cfg.price_usd),
                km_per_liter
            );
        }
    }
    println!("Electric:");
    for cfg in catalog {
        if let PowertrainConfig::Electric { kwh_per_km } = &cfg.powertrain {
            println!(
                "  {} (USD {}, {:.3} kWh/km)",
                cfg.display_name(),
                format_usd(cfg.price_usd),
                kwh_per_km
            );
        }
    }
}

fn print_report(request: &SimulationRequest, outcome: &SimulationOutcome) {
    let params = &request.parameters;

    println!("=== Payback Summary ===");
    println!(
        "Combustion vehicle : {} (USD {})",
        request.combustion.name,
        format_usd(request.combustion.price_usd)
    );
    if params.electric_incentive {
        println!(
            "Electric vehicle   : {} (USD {}, incentive price USD {})",
            request.electric.name,
            format_usd(request.electric.price_usd),
            format_usd(request.electric.price_usd * ELECTRIC_INCENTIVE_FACTOR)
        );
    } else {
        println!(
            "Electric vehicle   : {} (USD {})",
            request.electric.name,
            format_usd(request.electric.price_usd)
        );
    }
    println!("Annual distance    : {} km", params.annual_km);
    println!("Horizon            : {} years", params.horizon_years);
    println!(
        "Annual cost        : combustion USD {}, electric USD {}",
        format_usd(outcome.combustion_annual_usd),
        format_usd(outcome.electric_annual_usd)
    );
    println!();

    println!("Year | Combustion (USD) | Electric (USD) | Difference (USD)");
    for record in &outcome.projection.records {
        let row = record.rounded();
        println!(
            "{:>4} | {:>16.2} | {:>14.2} | {:>16.2}",
            row.year, row.combustion_usd, row.electric_usd, row.difference_usd
        );
    }
    println!();

    match outcome.break_even {
        BreakEvenPoint::AtPurchase => println!("Break-even : at purchase (year 0)"),
        BreakEvenPoint::AtYear(year) => println!("Break-even : year {}", year),
        BreakEvenPoint::Interpolated { years, bracket } => println!(
            "Break-even : {:.2} years (between years {} and {})",
            years, bracket.0, bracket.1
        ),
        BreakEvenPoint::NotReached => println!(
            "Break-even : not reached within {} years",
            params.horizon_years
        ),
    }
}

fn export_artifacts(
    output: &Path,
    request: &SimulationRequest,
    outcome: &SimulationOutcome,
) -> anyhow::Result<()> {
    let rows: Vec<export_projection::Record> = outcome
        .projection
        .records
        .iter()
        .map(|record| {
            let row = record.rounded();
            export_projection::Record {
                year: row.year,
                combustion_usd: row.combustion_usd,
                electric_usd: row.electric_usd,
                difference_usd: row.difference_usd,
            }
        })
        .collect();

    let mut writer = export_projection::writer_for_path(output)?;
    export_projection::write_header(writer.as_mut())?;
    for row in &rows {
        row.write_to(writer.as_mut())?;
    }
    writer.flush()?;

    if output != Path::new("-") {
        let params = &request.parameters;
        let last = outcome.projection.records.last();
        let meta = export_summary::Metadata {
            combustion_vehicle: &request.combustion.name,
            electric_vehicle: &request.electric.name,
            annual_km: params.annual_km,
            horizon_years: params.horizon_years,
            electric_incentive: params.electric_incentive,
            exchange_rate_pen_per_usd: request.rates.exchange_rate_pen_per_usd,
            gasoline_price_pen_per_gallon: request.rates.gasoline_price_pen_per_gallon,
            electricity_price_pen_per_kwh: request.rates.electricity_price_pen_per_kwh,
        };
        let figures = export_summary::Figures {
            combustion_annual_usd: outcome.combustion_annual_usd,
            electric_annual_usd: outcome.electric_annual_usd,
            combustion_total_usd: last.map_or(0.0, |r| r.combustion_usd),
            electric_total_usd: last.map_or(0.0, |r| r.electric_usd),
            break_even_years: outcome.break_even.years(),
        };
        export_summary::write_sidecar(output, &meta, &figures, &rows)?;
        println!("Wrote {} and its JSON summary sidecar", output.display());
    }

    Ok(())
}
