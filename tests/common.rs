// ABOUTME: Shared test utilities and fixtures for meal reconciliation integration tests
// ABOUTME: Provides quiet logging setup and food item builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_meal_reconcile`

use pierre_meal_reconcile::models::{FoodItem, Nutrient, NutritionFacts};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Food with nested nutrition
pub fn nested_food(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodItem {
    FoodItem::new(name).with_nutrition(NutritionFacts::new(calories, protein, carbs, fat))
}

/// Food with flat top-level nutrition
pub fn flat_food(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodItem {
    FoodItem::new(name)
        .with_flat(Nutrient::Calories, calories)
        .with_flat(Nutrient::Protein, protein)
        .with_flat(Nutrient::Carbs, carbs)
        .with_flat(Nutrient::Fat, fat)
}

/// Food with only a flat calorie value
pub fn calorie_food(name: &str, calories: f64) -> FoodItem {
    FoodItem::new(name).with_flat(Nutrient::Calories, calories)
}

/// A typical hand-edited lunch log
pub fn logged_lunch() -> Vec<FoodItem> {
    vec![
        nested_food("Turkey Sandwich", 420.0, 28.0, 40.0, 14.0).with_ingredients(vec![
            FoodItem::new("Whole Wheat Bread"),
            FoodItem::new("Turkey Breast"),
            FoodItem::new("Mustard"),
        ]),
        nested_food("Greek Yogurt", 150.0, 15.0, 8.0, 4.0),
        calorie_food("Apple", 95.0),
    ]
}

/// Assert two floats are equal within a small tolerance
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
