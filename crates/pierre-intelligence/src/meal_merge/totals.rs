// ABOUTME: Macro totals across a food list, tolerant of nested and flat nutrition
// ABOUTME: Sums calories, protein, carbs, and fat with missing values read as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{FoodItem, Nutrient, NutritionView};
use serde::{Deserialize, Serialize};

/// Summed macros for a list of foods
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl NutritionView for MacroTotals {
    fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }
}

/// Sum one nutrient across foods (nested value preferred, flat fallback, 0 otherwise)
#[must_use]
pub fn calculate_total(foods: &[FoodItem], nutrient: Nutrient) -> f64 {
    foods.iter().map(|food| food.nutrient(nutrient)).sum()
}

/// Total calories
#[must_use]
pub fn calculate_total_calories(foods: &[FoodItem]) -> f64 {
    calculate_total(foods, Nutrient::Calories)
}

/// Total protein in grams
#[must_use]
pub fn calculate_total_protein(foods: &[FoodItem]) -> f64 {
    calculate_total(foods, Nutrient::Protein)
}

/// Total carbohydrates in grams
#[must_use]
pub fn calculate_total_carbs(foods: &[FoodItem]) -> f64 {
    calculate_total(foods, Nutrient::Carbs)
}

/// Total fat in grams
#[must_use]
pub fn calculate_total_fat(foods: &[FoodItem]) -> f64 {
    calculate_total(foods, Nutrient::Fat)
}

/// All four totals in one pass
#[must_use]
pub fn calculate_macro_totals(foods: &[FoodItem]) -> MacroTotals {
    foods.iter().fold(MacroTotals::default(), |totals, food| MacroTotals {
        calories: totals.calories + food.calories(),
        protein: totals.protein + food.protein(),
        carbs: totals.carbs + food.carbs(),
        fat: totals.fat + food.fat(),
    })
}
