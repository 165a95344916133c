// ABOUTME: Meal log reconciliation command for pierre-meal-cli
// ABOUTME: Applies per-meal refinements to a daily meal log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_meal_reconcile::{
    config::MealMatchingConfig,
    errors::AppResult,
    food_io::{read_json, write_json},
    meal_merge::{MealReconciler, MealRefinement},
    models::MealLog,
};
use std::path::Path;
use tracing::info;

/// Reconcile the log in `log` with refinements in `refinements`
pub fn run(
    log: &Path,
    refinements: &Path,
    output: Option<&Path>,
    config: MealMatchingConfig,
) -> AppResult<()> {
    let meal_log: MealLog = read_json(log)?;
    let meal_refinements: Vec<MealRefinement> = read_json(refinements)?;

    let reconciled = MealReconciler::new(config).reconcile_meal_log(&meal_log, &meal_refinements);
    info!(
        log_id = %reconciled.id,
        meals_before = meal_log.meals.len(),
        meals_after = reconciled.meals.len(),
        "Reconciled meal log"
    );

    write_json(output, &reconciled)
}
