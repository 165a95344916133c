// ABOUTME: Merge command for pierre-meal-cli
// ABOUTME: Reconciles a refined food list into an existing one and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_meal_reconcile::{
    config::MealMatchingConfig,
    errors::AppResult,
    food_io::{read_food_list, write_json},
    meal_merge::MealReconciler,
};
use std::path::Path;
use tracing::info;

/// Merge `refined` into `existing` and write the merged list (or full outcome)
pub fn run(
    existing: &Path,
    refined: &Path,
    output: Option<&Path>,
    report: bool,
    config: MealMatchingConfig,
) -> AppResult<()> {
    let existing_foods = read_food_list(existing)?;
    let refined_foods = read_food_list(refined)?;

    let outcome = MealReconciler::new(config).reconcile(&existing_foods, &refined_foods);
    info!(
        existing = existing_foods.len(),
        refined = refined_foods.len(),
        merged = outcome.merged_count(),
        appended = outcome.appended_count(),
        result = outcome.foods.len(),
        "Reconciled food lists"
    );

    if report {
        write_json(output, &outcome)
    } else {
        write_json(output, &outcome.foods)
    }
}
