use assert_cmd::Command;
use std::fs::{self, File};
use std::io::Write;

#[test]
fn payback_plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("projection.csv");
    let png_path = dir.path().join("projection.png");

    let mut file = File::create(&csv_path).expect("csv create");
    writeln!(file, "year,combustion_usd,electric_usd,difference_usd").unwrap();
    for year in 0..=10u32 {
        let combustion = 20_000.0 + 2_000.0 * f64::from(year);
        let electric = 30_000.0 + 500.0 * f64::from(year);
        writeln!(
            file,
            "{year},{combustion:.2},{electric:.2},{:.2}",
            combustion - electric
        )
        .unwrap();
    }

    Command::cargo_bin("payback_plot")
        .expect("payback_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--start-year",
            "2026",
            "--width",
            "400",
            "--height",
            "300",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn payback_plot_rejects_empty_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("empty.csv");
    fs::write(
        &csv_path,
        "year,combustion_usd,electric_usd,difference_usd\n",
    )
    .expect("write header-only csv");

    Command::cargo_bin("payback_plot")
        .expect("payback_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            dir.path().join("empty.png").to_str().unwrap(),
        ])
        .assert()
        .failure();
}
