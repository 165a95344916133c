// ABOUTME: Meal merge module reconciling AI-refined food lists with logged meals
// ABOUTME: Name normalization, similarity matching, nutrition merging, and macro totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Merge
//!
//! After a user logs a meal, a refinement pass (typically an LLM re-reading a
//! photo or transcript) returns an updated list of foods. This module folds
//! that list back into the log without destroying what the user entered:
//!
//! - Every logged food survives; matched ones are updated in place.
//! - Each refined food updates at most one logged food, or is appended.
//! - Nutrient values only change when the refinement differs by more than
//!   the configured ratio (10% by default), so hand corrections stick.
//!
//! Matching is layered because plain edit distance misses the common case of
//! a swapped modifier ("turkey sandwich" vs "ham sandwich"):
//!
//! 1. exact match after normalization
//! 2. shared two-word tail for names of three or more words
//! 3. same dish category (shake, sandwich, burger, salad, ...)
//! 4. Levenshtein similarity ratio against a threshold (0.85 by default)
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_core::models::{FoodItem, Nutrient};
//! use pierre_intelligence::meal_merge::{calculate_total_calories, merge_foods_preserving_existing};
//!
//! let logged = vec![
//!     FoodItem::new("Turkey Sandwich").with_flat(Nutrient::Calories, 350.0),
//!     FoodItem::new("Apple").with_flat(Nutrient::Calories, 95.0),
//! ];
//! let refined = vec![FoodItem::new("Ham Sandwich").with_flat(Nutrient::Calories, 420.0)];
//!
//! let merged = merge_foods_preserving_existing(&logged, &refined);
//! assert_eq!(merged.len(), 2);
//! assert!((calculate_total_calories(&merged) - 515.0).abs() < 1e-9);
//! ```

/// Meal- and day-level reconciliation
pub mod meal_log;
/// Food name canonicalization
pub mod normalize;
/// Nutrition merge with significant-change rules
pub mod nutrition_merge;
/// Dish category rule table
pub mod patterns;
/// Food-list reconciliation driver
pub mod reconcile;
/// Name similarity decision and edit distance
pub mod similarity;
/// Macro totals
pub mod totals;

pub use meal_log::{reconcile_meal, reconcile_meal_log, MealRefinement};
pub use normalize::normalize_food_name;
pub use nutrition_merge::{is_significant_change, merge_nutrition, NutritionMerger};
pub use patterns::{shared_food_category, FoodCategory};
pub use reconcile::{merge_foods_preserving_existing, MealReconciler, MergeAction, MergeOutcome};
pub use similarity::{
    are_similar_names, are_similar_names_with_threshold, explain_similarity, find_matching_food,
    levenshtein_distance, similarity_ratio, MatchReason,
};
pub use totals::{
    calculate_macro_totals, calculate_total, calculate_total_calories, calculate_total_carbs,
    calculate_total_fat, calculate_total_protein, MacroTotals,
};
