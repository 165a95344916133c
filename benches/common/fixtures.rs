// ABOUTME: Benchmark fixtures generating realistic logged and refined food lists
// ABOUTME: Deterministic generation so measurements are reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for food lists.

use pierre_meal_reconcile::models::{FoodItem, Nutrient, NutritionFacts};

/// Predefined list sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum FoodBatchSize {
    /// A single meal (8 foods)
    Meal,
    /// A full day (40 foods)
    Day,
    /// A bulk import (200 foods)
    Import,
}

impl FoodBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Meal => 8,
            Self::Day => 40,
            Self::Import => 200,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Meal => "meal",
            Self::Day => "day",
            Self::Import => "import",
        }
    }
}

const MODIFIERS: [&str; 8] = [
    "turkey", "ham", "grilled", "iced", "strawberry", "greek", "spicy", "roasted",
];
const DISHES: [&str; 8] = [
    "sandwich", "coffee", "salad", "protein shake", "yogurt", "wrap", "bowl", "chicken",
];

/// Deterministic food name; `shift` swaps the modifier so refined names differ
fn food_name(index: usize, shift: usize) -> String {
    let modifier = MODIFIERS[(index + shift) % MODIFIERS.len()];
    let dish = DISHES[index % DISHES.len()];
    format!("{modifier} {dish} {index}")
}

#[allow(clippy::cast_precision_loss)]
fn food(index: usize, shift: usize, scale: f64) -> FoodItem {
    let calories = (150 + (index * 37) % 600) as f64 * scale;
    let item = FoodItem::new(food_name(index, shift));
    if index % 2 == 0 {
        item.with_nutrition(NutritionFacts::new(
            calories,
            calories * 0.05,
            calories * 0.1,
            calories * 0.03,
        ))
    } else {
        item.with_flat(Nutrient::Calories, calories)
    }
}

/// Logged foods
#[must_use]
pub fn generate_logged_foods(size: FoodBatchSize) -> Vec<FoodItem> {
    (0..size.count()).map(|index| food(index, 0, 1.0)).collect()
}

/// Refined foods: half renamed and rescaled, half new
#[must_use]
pub fn generate_refined_foods(size: FoodBatchSize) -> Vec<FoodItem> {
    let count = size.count();
    (0..count / 2)
        .map(|index| food(index, 1, 1.2))
        .chain((count..count + count / 2).map(|index| food(index, 0, 1.0)))
        .collect()
}
