// ABOUTME: Totals command for pierre-meal-cli
// ABOUTME: Prints summed calories, protein, carbs, and fat for a food list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_meal_reconcile::{
    errors::AppResult,
    food_io::{read_food_list, write_json},
    meal_merge::calculate_macro_totals,
};
use std::path::Path;

/// Print macro totals for the foods in `input`
pub fn run(input: &Path) -> AppResult<()> {
    let foods = read_food_list(input)?;
    write_json(None, &calculate_macro_totals(&foods))
}
