use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn cli_lists_catalog_split_by_class() {
    Command::cargo_bin("payback")
        .expect("payback bin")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Combustion:"))
        .stdout(predicate::str::contains("Electric:"))
        .stdout(predicate::str::contains("Toyota Yaris"))
        .stdout(predicate::str::contains("BYD Dolphin"));
}

#[test]
fn cli_prints_summary_table_and_break_even() {
    Command::cargo_bin("payback")
        .expect("payback bin")
        .args([
            "--combustion",
            "Toyota Yaris",
            "--electric",
            "BYD Dolphin",
            "--annual-km",
            "15000",
            "--years",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Payback Summary ==="))
        .stdout(predicate::str::contains("Year | Combustion (USD)"))
        .stdout(predicate::str::contains("Break-even"));
}

#[test]
fn cli_writes_csv_and_summary_sidecar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("projection.csv");

    Command::cargo_bin("payback")
        .expect("payback bin")
        .args(["--output", csv_path.to_str().unwrap()])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).expect("csv contents");
    assert!(csv.starts_with("year,combustion_usd,electric_usd,difference_usd"));
    // Header plus eleven rows for the default ten-year horizon.
    assert_eq!(csv.lines().count(), 12, "csv:\n{}", csv);

    let sidecar = dir.path().join("projection_summary.json");
    let json = fs::read_to_string(&sidecar).expect("sidecar contents");
    assert!(json.contains("\"combustion_vehicle\""));
    assert!(json.contains("\"rows\""));
}

#[test]
fn cli_streams_csv_to_stdout() {
    Command::cargo_bin("payback")
        .expect("payback bin")
        .args(["--output", "-", "--years", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "year,combustion_usd,electric_usd,difference_usd",
        ));
}

#[test]
fn cli_rejects_out_of_range_usage_parameters() {
    Command::cargo_bin("payback")
        .expect("payback bin")
        .args(["--years", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--years"));

    Command::cargo_bin("payback")
        .expect("payback bin")
        .args(["--annual-km", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--annual-km"));
}

#[test]
fn cli_reports_unknown_vehicle_names() {
    Command::cargo_bin("payback")
        .expect("payback bin")
        .args(["--electric", "Tesla Model 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
