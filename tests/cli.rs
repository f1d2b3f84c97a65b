use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn prabhawatt(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prabhawatt").unwrap();
    cmd.env("PRABHAWATT_DATA_DIR", base).env_remove("RUST_LOG");
    cmd
}

fn write_profile(base: &Path) {
    let data = base.join("data");
    fs::create_dir_all(&data).unwrap();
    let record = r#"{
        "id": "6f1c2d3e-4b5a-4c7d-8e9f-0a1b2c3d4e5f",
        "submitted_at": "2026-03-01T09:30:00Z",
        "profile": {
            "electricityProvider": "Tata Power Delhi Distribution Limited",
            "monthlyBill": "3200",
            "hasSolarPanels": true,
            "solarCapacity": "5",
            "installationDate": "2024-06-15",
            "hasBatteryStorage": false,
            "storageCapacity": "",
            "smartDevices": {
                "thermostat": true,
                "washingMachine": false,
                "dishwasher": false,
                "evCharger": true,
                "other": "Geyser"
            },
            "primaryGoal": "maximizeSolar",
            "notificationMethod": "sms",
            "reportFrequency": "weekly"
        }
    }"#;
    fs::write(data.join("profile.json"), record).unwrap();
}

#[test]
fn test_providers_search_lists_matches() {
    let temp = TempDir::new().unwrap();

    prabhawatt(temp.path())
        .args(["providers", "bses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BSES Rajdhani Power Limited"))
        .stdout(predicate::str::contains("BSES Yamuna Power Limited"))
        .stdout(predicate::str::contains("Showing 2 of"));
}

#[test]
fn test_providers_without_match() {
    let temp = TempDir::new().unwrap();

    prabhawatt(temp.path())
        .args(["providers", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers match 'zzzz'."));
}

#[test]
fn test_config_shows_paths_and_settings() {
    let temp = TempDir::new().unwrap();

    prabhawatt(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("PrabhaWatt Configuration"))
        .stdout(predicate::str::contains("profile.json"))
        .stdout(predicate::str::contains("Dashboard path:       /dashboard"))
        .stdout(predicate::str::contains("Onboarding completed: false"));

    assert!(temp.path().join("config.json").exists());
}

#[test]
fn test_profile_show_without_submission_fails() {
    let temp = TempDir::new().unwrap();

    prabhawatt(temp.path())
        .args(["profile", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no onboarding submitted yet"));
}

#[test]
fn test_history_empty() {
    let temp = TempDir::new().unwrap();

    prabhawatt(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No onboarding activity recorded yet."));
}

#[test]
fn test_profile_show_prints_submission() {
    let temp = TempDir::new().unwrap();
    write_profile(temp.path());

    prabhawatt(temp.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tata Power Delhi Distribution Limited"))
        .stdout(predicate::str::contains("Geyser"));
}

#[test]
fn test_profile_export_json_to_stdout() {
    let temp = TempDir::new().unwrap();
    write_profile(temp.path());

    prabhawatt(temp.path())
        .args(["profile", "export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"electricityProvider\""))
        .stdout(predicate::str::contains("\"primaryGoal\": \"maximizeSolar\""));
}

#[test]
fn test_profile_export_yaml_to_file() {
    let temp = TempDir::new().unwrap();
    write_profile(temp.path());
    let out = temp.path().join("profile.yaml");

    prabhawatt(temp.path())
        .args(["profile", "export", "--format", "yml", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported profile to"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("# PrabhaWatt onboarding profile"));
    assert!(written.contains("reportFrequency: weekly"));
}

#[test]
fn test_setup_skips_when_already_onboarded() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{"onboarding_completed": true}"#,
    )
    .unwrap();

    prabhawatt(temp.path())
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Onboarding is already complete."));
}

#[test]
fn test_setup_with_closed_input_is_cancelled() {
    let temp = TempDir::new().unwrap();

    prabhawatt(temp.path())
        .arg("setup")
        .write_stdin("")
        .assert()
        .success();

    prabhawatt(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("ABANDONED"));
}
