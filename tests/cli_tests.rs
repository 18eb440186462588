//! End-to-end tests for the headless `--export` command.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

/// Path to the mealboard binary
fn mealboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_mealboard")
}

#[test]
fn test_headless_export_writes_spreadsheet() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("data.json"),
        r#"{"menus": {"staple": ["Rice"], "soup": ["Udon"], "side": ["Kimchi"], "other": ["Fruit"]}, "plans": {"2026-02": {"3": "Rice | Udon |  | "}}, "day_slots": {}}"#,
    )
    .unwrap();

    let output = Command::new(mealboard_bin())
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--export",
            "2026-02",
        ])
        .output()
        .expect("Failed to run mealboard");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Exported"));
    assert!(dir
        .path()
        .join("export")
        .join("meal_plan_2026-02.xlsx")
        .exists());
}

#[test]
fn test_headless_export_works_without_data_files() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(mealboard_bin())
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--export",
            "2026-07",
        ])
        .output()
        .expect("Failed to run mealboard");

    assert!(output.status.success());
    assert!(dir
        .path()
        .join("export")
        .join("meal_plan_2026-07.xlsx")
        .exists());
}

#[test]
fn test_invalid_month_argument_fails_with_hint() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(mealboard_bin())
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--export",
            "2026-13",
        ])
        .output()
        .expect("Failed to run mealboard");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("--export 2026-02"));
}

#[test]
fn test_malformed_month_argument_fails() {
    let dir = TempDir::new().unwrap();

    let output = Command::new(mealboard_bin())
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--export",
            "February",
        ])
        .output()
        .expect("Failed to run mealboard");

    assert!(!output.status.success());
}
