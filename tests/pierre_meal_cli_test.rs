// ABOUTME: Integration tests for the pierre-meal-cli binary
// ABOUTME: Runs each subcommand against temp files and checks output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

mod common;

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_pierre-meal-cli"));
    for var in [
        "INTELLIGENCE_MEAL_SIMILARITY_THRESHOLD",
        "INTELLIGENCE_MEAL_SIGNIFICANT_CHANGE_RATIO",
        "INTELLIGENCE_MEAL_SHARED_TAIL_ENABLED",
        "INTELLIGENCE_MEAL_FOOD_PATTERNS_ENABLED",
        "RUST_LOG",
    ] {
        command.env_remove(var);
    }
    command
}

fn write_fixture(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn lunch_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let existing = write_fixture(
        dir,
        "existing.json",
        &json!([
            {"name": "Turkey Sandwich", "calories": 350},
            {"name": "Apple", "calories": 95}
        ]),
    );
    let refined = write_fixture(
        dir,
        "refined.json",
        &json!([
            {"name": "Ham Sandwich", "calories": 420},
            {"name": "Iced Tea", "calories": 90}
        ]),
    );
    (existing, refined)
}

#[test]
fn test_long_help() {
    let output = cli().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Merges AI-refined food lists into logged meals"));
    assert!(stdout.contains("merge"));
    assert!(stdout.contains("reconcile-log"));
}

#[test]
fn test_short_help() {
    let output = cli().arg("-h").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pierre Meal Reconciliation CLI"));
    assert!(stdout.contains("totals"));
}

#[test]
fn test_merge_writes_food_list() {
    let dir = TempDir::new().unwrap();
    let (existing, refined) = lunch_fixtures(dir.path());

    let output = cli()
        .args(["merge", "--existing"])
        .arg(&existing)
        .arg("--refined")
        .arg(&refined)
        .output()
        .unwrap();

    let foods = stdout_json(&output);
    let foods = foods.as_array().unwrap();
    assert_eq!(foods.len(), 3);
    assert_eq!(foods[0]["name"], "Turkey Sandwich");
    assert_eq!(foods[0]["calories"], 420.0);
    assert_eq!(foods[1]["name"], "Apple");
    assert_eq!(foods[2]["name"], "Iced Tea");
}

#[test]
fn test_merge_report_to_file() {
    let dir = TempDir::new().unwrap();
    let (existing, refined) = lunch_fixtures(dir.path());
    let result_path = dir.path().join("result.json");

    let output = cli()
        .args(["merge", "--report", "--existing"])
        .arg(&existing)
        .arg("--refined")
        .arg(&refined)
        .arg("-o")
        .arg(&result_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let report: Value = serde_json::from_str(&fs::read_to_string(&result_path).unwrap()).unwrap();
    let actions = report["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["action"], "merged");
    assert_eq!(actions[0]["reason"]["rule"], "food_pattern");
    assert_eq!(actions[0]["reason"]["category"], "sandwich");
    assert_eq!(actions[1]["action"], "appended");
    assert_eq!(actions[1]["result_index"], 2);
}

#[test]
fn test_merge_change_ratio_flag() {
    let dir = TempDir::new().unwrap();
    let (existing, refined) = lunch_fixtures(dir.path());

    let output = cli()
        .args(["merge", "--change-ratio", "0.5", "--existing"])
        .arg(&existing)
        .arg("--refined")
        .arg(&refined)
        .output()
        .unwrap();

    let foods = stdout_json(&output);
    assert_eq!(foods[0]["calories"], 350.0);
}

#[test]
fn test_totals() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        dir.path(),
        "foods.json",
        &json!([
            {"name": "Oatmeal", "nutrition": {"calories": 150, "protein": 5, "carbs": 27, "fat": 3}},
            {"name": "Banana", "calories": 105, "carbs": 27},
            {"name": "Water"}
        ]),
    );

    let output = cli().args(["totals", "--input"]).arg(&input).output().unwrap();

    let totals = stdout_json(&output);
    assert_eq!(totals["calories"], 255.0);
    assert_eq!(totals["protein"], 5.0);
    assert_eq!(totals["carbs"], 54.0);
    assert_eq!(totals["fat"], 3.0);
}

#[test]
fn test_compare() {
    let output = cli()
        .args(["compare", "Turkey Sandwich", "Ham Sandwich"])
        .output()
        .unwrap();
    let comparison = stdout_json(&output);
    assert_eq!(comparison["similar"], true);
    assert_eq!(comparison["normalized_a"], "turkey sandwich");
    assert_eq!(comparison["reason"]["rule"], "food_pattern");

    let output = cli()
        .args(["compare", "Greek Yogurt", "Scrambled Eggs"])
        .output()
        .unwrap();
    let comparison = stdout_json(&output);
    assert_eq!(comparison["similar"], false);
    assert!(comparison.get("reason").is_none());
}

#[test]
fn test_reconcile_log() {
    let dir = TempDir::new().unwrap();
    let log = write_fixture(
        dir.path(),
        "day.json",
        &json!({
            "id": "log-1",
            "date": "2025-03-14T00:00:00Z",
            "meals": [
                {"meal_type": "breakfast", "foods": [{"name": "Toast", "calories": 90}]},
                {"meal_type": "lunch", "foods": [{"name": "Caesar Salad", "calories": 350}]}
            ]
        }),
    );
    let refinements = write_fixture(
        dir.path(),
        "refinements.json",
        &json!([
            {"meal_type": "lunch", "foods": [{"name": "Chicken Salad", "calories": 480}]},
            {"meal_type": "dinner", "foods": [{"name": "Salmon", "calories": 400}]}
        ]),
    );

    let output = cli()
        .args(["reconcile-log", "--log"])
        .arg(&log)
        .arg("--refinements")
        .arg(&refinements)
        .output()
        .unwrap();

    let day = stdout_json(&output);
    let meals = day["meals"].as_array().unwrap();
    assert_eq!(meals.len(), 3);
    assert_eq!(meals[1]["foods"][0]["name"], "Caesar Salad");
    assert_eq!(meals[1]["foods"][0]["calories"], 480.0);
    assert_eq!(meals[2]["meal_type"], "dinner");
}

#[test]
fn test_missing_input_exits_no_input() {
    let dir = TempDir::new().unwrap();
    let output = cli()
        .args(["totals", "--input"])
        .arg(dir.path().join("absent.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(66));
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.json"));
}

#[test]
fn test_malformed_json_exits_data_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.json");
    fs::write(&input, "[{\"name\": \"Toast\",").unwrap();

    let output = cli().args(["totals", "--input"]).arg(&input).output().unwrap();
    assert_eq!(output.status.code(), Some(65));
}

#[test]
fn test_out_of_range_threshold_exits_data_error() {
    let output = cli()
        .args(["compare", "Toast", "Toast", "--threshold", "2.0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(65));
}
