use chrono::{Datelike, Local};
use clap::Parser;
use csv::ReaderBuilder;
use ev_payback_calculator::simulation::BreakEvenMode;
use ev_payback_calculator::simulation::breakeven;
use ev_payback_calculator::simulation::projection::{CostProjection, YearlyCost};
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render cumulative cost curves and the break-even marker from a projection CSV"
)]
struct Cli {
    /// Projection CSV produced by the payback binary
    #[arg(long)]
    input: String,
    /// Output PNG path
    #[arg(long, default_value = "artifacts/payback.png")]
    output: PathBuf,
    /// First calendar year on the x-axis (defaults to the current year)
    #[arg(long)]
    start_year: Option<i32>,
    /// Image width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Image height in pixels
    #[arg(long, default_value_t = 700)]
    height: u32,
}

#[derive(Debug, Clone, Copy)]
struct Row {
    year: u32,
    combustion_usd: f64,
    electric_usd: f64,
    difference_usd: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let rows = read_rows(&cli.input)?;
    if rows.is_empty() {
        return Err(anyhow::anyhow!("No projection rows in the provided CSV"));
    }

    let start_year = cli.start_year.unwrap_or_else(|| Local::now().year());
    let horizon = rows.last().map_or(0, |row| row.year);

    let projection = CostProjection {
        records: rows
            .iter()
            .map(|row| YearlyCost {
                year: row.year,
                combustion_usd: row.combustion_usd,
                electric_usd: row.electric_usd,
                difference_usd: row.difference_usd,
            })
            .collect(),
    };
    let break_even_years = match breakeven::solve(&projection, BreakEvenMode::Interpolated) {
        Ok(point) => point.years(),
        // A degenerate slope still has a well-defined first caught-up year.
        Err(_) => breakeven::solve(&projection, BreakEvenMode::IntegerYear)
            .ok()
            .and_then(|point| point.years()),
    };

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut min_cost = f64::INFINITY;
    let mut max_cost = f64::NEG_INFINITY;
    for row in &rows {
        min_cost = min_cost.min(row.combustion_usd.min(row.electric_usd));
        max_cost = max_cost.max(row.combustion_usd.max(row.electric_usd));
    }
    let span = (max_cost - min_cost).max(1.0);
    let y_min = (min_cost - 0.05 * span).max(0.0);
    let y_max = max_cost + 0.05 * span;
    let x_max = (horizon as f64).max(1.0);

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let combustion_color = RGBColor(200, 60, 40);
    let electric_color = RGBColor(30, 110, 190);
    let marker_color = RGBColor(20, 140, 70);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Cumulative ownership cost".to_string(), caption_font)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Calendar year")
        .y_desc("Cumulative cost (USD)")
        .label_style(label_font.clone())
        .x_labels((horizon as usize + 1).min(16))
        .y_labels(8)
        .x_label_formatter(&|x| format!("{}", start_year + x.round() as i32))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    let combustion_points: Vec<(f64, f64)> = rows
        .iter()
        .map(|row| (row.year as f64, row.combustion_usd))
        .collect();
    let electric_points: Vec<(f64, f64)> = rows
        .iter()
        .map(|row| (row.year as f64, row.electric_usd))
        .collect();

    chart
        .draw_series(std::iter::once(PathElement::new(
            combustion_points.clone(),
            ShapeStyle::from(&combustion_color).stroke_width(2),
        )))?
        .label("Combustion")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], combustion_color.stroke_width(2))
        });
    chart.draw_series(
        combustion_points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, combustion_color.filled())),
    )?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            electric_points.clone(),
            ShapeStyle::from(&electric_color).stroke_width(2),
        )))?
        .label("Electric")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], electric_color.stroke_width(2))
        });
    chart.draw_series(
        electric_points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, electric_color.filled())),
    )?;

    if let Some(years) = break_even_years {
        let x = years.clamp(0.0, x_max);
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, y_min), (x, y_max)],
            ShapeStyle::from(&marker_color.mix(0.7)).stroke_width(2),
        )))?;
        let text = format!("break-even {:.1} ({:.1} yr)", start_year as f64 + years, years);
        let text_pos = (x + 0.02 * x_max, y_min + 0.92 * (y_max - y_min));
        chart.draw_series(std::iter::once(Text::new(
            text,
            text_pos,
            label_font.clone().color(&marker_color),
        )))?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .label_font(label_font.clone())
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_rows(path: &str) -> anyhow::Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let year_idx = column(&headers, "year")?;
    let combustion_idx = column(&headers, "combustion_usd")?;
    let electric_idx = column(&headers, "electric_usd")?;
    let difference_idx = column(&headers, "difference_usd")?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let year: f64 = r.get(year_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let combustion: f64 = r
            .get(combustion_idx)
            .unwrap_or("")
            .parse()
            .unwrap_or(f64::NAN);
        let electric: f64 = r
            .get(electric_idx)
            .unwrap_or("")
            .parse()
            .unwrap_or(f64::NAN);
        let difference: f64 = r
            .get(difference_idx)
            .unwrap_or("")
            .parse()
            .unwrap_or(f64::NAN);
        if year.is_finite()
            && year >= 0.0
            && combustion.is_finite()
            && electric.is_finite()
            && difference.is_finite()
        {
            rows.push(Row {
                year: year as u32,
                combustion_usd: combustion,
                electric_usd: electric,
                difference_usd: difference,
            });
        }
    }
    rows.sort_by_key(|row| row.year);
    Ok(rows)
}

fn column(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
}
