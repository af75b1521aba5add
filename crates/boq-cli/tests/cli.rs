//! CLI integration tests

use assert_cmd::Command;
use boq_domain::{CostCategory, CostReport};
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::{tempdir, TempDir};

/// Command with an isolated config directory
fn cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("boq-estimator").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

const CALC_ARGS: [&str; 11] = [
    "calc",
    "--square-feet",
    "1000",
    "--beds",
    "3",
    "--baths",
    "2",
    "--garages",
    "1",
    "--estimated-cost",
    "150000",
];

#[test]
fn calc_prints_all_sections() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(CALC_ARGS)
        .assert()
        .success()
        .stdout(contains("Foundation"))
        .stdout(contains("Walls"))
        .stdout(contains("Roofing"))
        .stdout(contains("Windows and Doors"))
        .stdout(contains("Interior Finishing"))
        .stdout(contains("Labour cost (USD): $30000"));
}

#[test]
fn calc_json_parses_as_report() {
    let home = tempdir().unwrap();
    let output = cmd(&home)
        .args(["--format", "json"])
        .args(CALC_ARGS)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: CostReport = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.categories().collect::<Vec<_>>(), CostCategory::ALL);
    assert_eq!(
        report.item(CostCategory::WindowsAndDoors, "Doors").unwrap().cost,
        480.0
    );
    assert_eq!(report.labour_cost, 30_000.0);
}

#[test]
fn calc_rejects_negative_input() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args([
            "calc",
            "--square-feet",
            "1000",
            "--beds",
            "-1",
            "--baths",
            "2",
            "--garages",
            "1",
            "--estimated-cost",
            "150000",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Invalid input for `beds`"));
}

#[test]
fn calc_zero_building() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args([
            "calc",
            "--square-feet",
            "0",
            "--beds",
            "0",
            "--baths",
            "0",
            "--garages",
            "0",
            "--estimated-cost",
            "0",
        ])
        .assert()
        .success()
        .stdout(contains("Sliding Glass Doors"));
}

#[test]
fn calc_writes_exports() {
    let home = tempdir().unwrap();
    let out = tempdir().unwrap();
    let xlsx = out.path().join("estimate.xlsx");
    let csv = out.path().join("estimate.csv");

    cmd(&home)
        .args(CALC_ARGS)
        .arg("--export")
        .arg(&xlsx)
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success();

    assert!(xlsx.exists());
    let text = std::fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("Section,Material,Unit Price (USD),Quantity,Cost (USD)"));
    assert!(text.contains("Foundation,Cement,12.00,111,1333"));
}

#[test]
fn from_json_reads_prediction() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let file = dir.path().join("prediction.json");
    std::fs::write(
        &file,
        r#"{"square_feet": 1200.2, "beds": 2, "baths": 1, "garages": 0, "estimated_cost": 99999.5}"#,
    )
    .unwrap();

    cmd(&home)
        .arg("from-json")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Square feet:       1200"))
        .stdout(contains("Cost (USD):        $100000"));
}

#[test]
fn from_json_rejects_non_numeric() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let file = dir.path().join("prediction.json");
    std::fs::write(
        &file,
        r#"{"square_feet": "big", "beds": 2, "baths": 1, "garages": 0, "estimated_cost": 1}"#,
    )
    .unwrap();

    cmd(&home)
        .arg("from-json")
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("square_feet"));
}

#[test]
fn export_saved_report() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let report_path = dir.path().join("report.json");

    let output = cmd(&home)
        .args(["--format", "json"])
        .args(CALC_ARGS)
        .output()
        .unwrap();
    std::fs::write(&report_path, &output.stdout).unwrap();

    cmd(&home)
        .arg("export")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(contains("report.xlsx"));
    assert!(dir.path().join("report.xlsx").exists());
}

#[test]
fn estimate_without_service_is_retryable() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let image = dir.path().join("plan.png");
    std::fs::write(&image, b"fake image bytes").unwrap();

    cmd(&home)
        .args(["--predictor-url", "http://127.0.0.1:9/api/predict/"])
        .arg("estimate")
        .arg(&image)
        .assert()
        .failure()
        .stderr(contains("No structural prediction available"))
        .stderr(contains("try again"));
}

#[test]
fn config_set_and_show() {
    let home = tempdir().unwrap();
    cmd(&home)
        .args(["config", "--set-timeout", "12"])
        .assert()
        .success()
        .stdout(contains("Configuration updated"));

    cmd(&home)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(contains("Timeout:        12s"));
}

#[test]
fn config_reset_repairs_corrupt_file() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join("boq-estimator");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{not json").unwrap();

    cmd(&home)
        .args(CALC_ARGS)
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));

    cmd(&home)
        .args(["config", "--reset"])
        .assert()
        .success()
        .stdout(contains("Configuration reset to defaults"));

    cmd(&home)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(contains("Timeout:        30s"));
    cmd(&home).args(CALC_ARGS).assert().success();
}
