// ABOUTME: Compare command for pierre-meal-cli
// ABOUTME: Reports whether two food names match and which rule decided it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_meal_reconcile::{
    config::MealMatchingConfig,
    errors::AppResult,
    food_io::write_json,
    meal_merge::{explain_similarity, normalize_food_name, similarity_ratio, MatchReason},
};
use serde::Serialize;

#[derive(Serialize)]
struct Comparison {
    name_a: String,
    name_b: String,
    normalized_a: String,
    normalized_b: String,
    similarity_ratio: f64,
    similar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<MatchReason>,
}

/// Compare two names and print the decision
pub fn run(name_a: String, name_b: String, config: &MealMatchingConfig) -> AppResult<()> {
    let normalized_a = normalize_food_name(&name_a);
    let normalized_b = normalize_food_name(&name_b);
    let reason = explain_similarity(&name_a, &name_b, config);

    write_json(
        None,
        &Comparison {
            similarity_ratio: similarity_ratio(&normalized_a, &normalized_b),
            similar: reason.is_some(),
            reason,
            name_a,
            name_b,
            normalized_a,
            normalized_b,
        },
    )
}
