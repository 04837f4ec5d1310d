//! End-to-end tests for the tally binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tally(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.current_dir(temp.path())
        .env("TALLY_CLI_CONFIG_DIR", temp.path().join("config"));
    cmd
}

fn write_fixture(temp: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const SAMPLE_CSV: &str = "amount,date,category,participants\n\
                          12.50,2025-01-15,food,alex;sam\n\
                          7.25,2025-01-16,food,\n\
                          40.00,2025-01-17,rent,alex\n";

#[test]
fn report_runs_the_full_pipeline() {
    let temp = TempDir::new().unwrap();
    let csv = write_fixture(&temp, "expenses.csv", SAMPLE_CSV);

    tally(&temp)
        .arg("report")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 expenses"))
        .stdout(predicate::str::contains("Total expenditure: $59.75"))
        .stdout(predicate::str::contains("$19.75"))
        .stdout(predicate::str::contains("$40.00"))
        .stdout(predicate::str::contains("Chart saved as"));

    let chart = fs::read_to_string(temp.path().join("expense_breakdown.txt")).unwrap();
    assert!(chart.contains("rent"));
    assert!(chart.contains("food"));
    assert!(chart.contains("%"));
}

#[test]
fn report_skips_malformed_rows() {
    let temp = TempDir::new().unwrap();
    let csv = write_fixture(
        &temp,
        "expenses.csv",
        "amount,date,category\n\
         12.50,2025-01-15,food\n\
         oops,2025-01-16,food\n\
         40.00,2025-01-17,rent\n",
    );

    tally(&temp)
        .arg("report")
        .arg(&csv)
        .arg("--no-chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 expenses"))
        .stdout(predicate::str::contains("Skipped 1 malformed row(s)"))
        .stdout(predicate::str::contains("line 3"));
}

#[test]
fn report_with_no_data_skips_rendering() {
    let temp = TempDir::new().unwrap();
    let csv = write_fixture(&temp, "empty.csv", "amount,date,category\n");

    tally(&temp)
        .arg("report")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 expenses"))
        .stdout(predicate::str::contains("No data available to plot."));

    assert!(!temp.path().join("expense_breakdown.txt").exists());
}

#[test]
fn report_exports_breakdown_csv() {
    let temp = TempDir::new().unwrap();
    let csv = write_fixture(&temp, "expenses.csv", SAMPLE_CSV);
    let out = temp.path().join("breakdown.csv");

    tally(&temp)
        .arg("report")
        .arg(&csv)
        .arg("--no-chart")
        .arg("--export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Breakdown exported"));

    let exported = fs::read_to_string(&out).unwrap();
    assert!(exported.starts_with("Category,Amount,Count,Percentage"));
    assert!(exported.contains("rent,40.00,1,"));
}

#[test]
fn report_top_limits_output() {
    let temp = TempDir::new().unwrap();
    let csv = write_fixture(&temp, "expenses.csv", SAMPLE_CSV);

    tally(&temp)
        .arg("report")
        .arg(&csv)
        .arg("--no-chart")
        .arg("--top")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1 categories"))
        .stdout(predicate::str::contains("rent"));
}

#[test]
fn balance_sums_signed_amounts() {
    let temp = TempDir::new().unwrap();
    let csv = write_fixture(&temp, "expenses.csv", SAMPLE_CSV);

    tally(&temp)
        .arg("balance")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 transactions"))
        .stdout(predicate::str::contains("-$59.75"));
}

#[test]
fn missing_file_is_an_import_error() {
    let temp = TempDir::new().unwrap();

    tally(&temp)
        .arg("report")
        .arg("does-not-exist.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));
}

#[test]
fn config_shows_settings() {
    let temp = TempDir::new().unwrap();

    tally(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: $"))
        .stdout(predicate::str::contains("expense_breakdown.txt"));
}
