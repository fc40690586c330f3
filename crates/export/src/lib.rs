//! Export helpers for CSV and JSON artifacts.

pub mod projection {
    use serde::Serialize;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str = "year,combustion_usd,electric_usd,difference_usd";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard projection CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Row emitted by the projection exporter, shared by the CSV artifact
    /// and the JSON sidecar.
    #[derive(Debug, Clone, Copy, Serialize)]
    pub struct Record {
        pub year: u32,
        pub combustion_usd: f64,
        pub electric_usd: f64,
        pub difference_usd: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        /// Amounts are fixed to two decimals.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.2},{:.2},{:.2}",
                self.year, self.combustion_usd, self.electric_usd, self.difference_usd,
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use payback_core::money::round_to_cents;

    use crate::projection::Record;

    /// Metadata describing the simulation run.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub combustion_vehicle: &'a str,
        pub electric_vehicle: &'a str,
        pub annual_km: f64,
        pub horizon_years: u32,
        pub electric_incentive: bool,
        pub exchange_rate_pen_per_usd: f64,
        pub gasoline_price_pen_per_gallon: f64,
        pub electricity_price_pen_per_kwh: f64,
    }

    /// Headline figures of a finished run.
    #[derive(Debug)]
    pub struct Figures {
        pub combustion_annual_usd: f64,
        pub electric_annual_usd: f64,
        pub combustion_total_usd: f64,
        pub electric_total_usd: f64,
        pub break_even_years: Option<f64>,
    }

    #[derive(Serialize)]
    struct SummarySidecar<'a> {
        combustion_vehicle: &'a str,
        electric_vehicle: &'a str,
        annual_km: f64,
        horizon_years: u32,
        electric_incentive: bool,
        exchange_rate_pen_per_usd: f64,
        gasoline_price_pen_per_gallon: f64,
        electricity_price_pen_per_kwh: f64,
        combustion_annual_usd: f64,
        electric_annual_usd: f64,
        combustion_total_usd: f64,
        electric_total_usd: f64,
        break_even_years: Option<f64>,
        rows: &'a [Record],
    }

    /// Write a JSON summary sidecar next to the CSV artifact, deriving the
    /// sidecar name from the CSV file stem.
    pub fn write_sidecar(
        output: &Path,
        meta: &Metadata<'_>,
        figures: &Figures,
        rows: &[Record],
    ) -> io::Result<()> {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }

        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("projection");
        let summary_path = parent.join(format!("{}_summary.json", stem));

        let sidecar = SummarySidecar {
            combustion_vehicle: meta.combustion_vehicle,
            electric_vehicle: meta.electric_vehicle,
            annual_km: meta.annual_km,
            horizon_years: meta.horizon_years,
            electric_incentive: meta.electric_incentive,
            exchange_rate_pen_per_usd: meta.exchange_rate_pen_per_usd,
            gasoline_price_pen_per_gallon: meta.gasoline_price_pen_per_gallon,
            electricity_price_pen_per_kwh: meta.electricity_price_pen_per_kwh,
            combustion_annual_usd: round_to_cents(figures.combustion_annual_usd),
            electric_annual_usd: round_to_cents(figures.electric_annual_usd),
            combustion_total_usd: round_to_cents(figures.combustion_total_usd),
            electric_total_usd: round_to_cents(figures.electric_total_usd),
            break_even_years: figures.break_even_years,
            rows,
        };

        to_writer_pretty(File::create(&summary_path)?, &sidecar)?;
        Ok(())
    }
}
