// ABOUTME: Merges a refined version of a food item into the logged version
// ABOUTME: Serving corrections always apply, nutrient values only on significant change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::MealMatchingConfig;
use pierre_core::constants::meal_matching::DEFAULT_SIGNIFICANT_CHANGE_RATIO;
use pierre_core::models::{FoodItem, Nutrient};
use tracing::debug;

/// Whether a refined value differs enough from the existing one to replace it
///
/// A zero on exactly one side is always significant. Otherwise the relative
/// change `|refined - existing| / |existing|` must exceed `ratio`.
#[must_use]
pub fn is_significant_change(existing: f64, refined: f64, ratio: f64) -> bool {
    match (existing == 0.0, refined == 0.0) {
        (true, true) => false,
        (true, false) | (false, true) => true,
        (false, false) => (refined - existing).abs() / existing.abs() > ratio,
    }
}

/// Combines existing and refined versions of the same logged food
#[derive(Debug, Clone, Copy)]
pub struct NutritionMerger {
    significant_change_ratio: f64,
}

impl Default for NutritionMerger {
    fn default() -> Self {
        Self {
            significant_change_ratio: DEFAULT_SIGNIFICANT_CHANGE_RATIO,
        }
    }
}

impl NutritionMerger {
    /// Create a merger using the configured significant-change ratio
    #[must_use]
    pub const fn new(config: &MealMatchingConfig) -> Self {
        Self {
            significant_change_ratio: config.significant_change_ratio,
        }
    }

    /// Merge `refined` into a copy of `existing`
    ///
    /// - `quantity` and `unit` from the refinement always win when present.
    /// - Nutrients are merged within the refinement's shape: nested when the
    ///   refinement carries a `nutrition` record (created on the result if
    ///   missing), flat otherwise. A nutrient the refinement omits is left
    ///   alone; one it supplies replaces the existing value (missing reads as 0)
    ///   only on a significant change.
    /// - A non-empty refined `ingredients` list replaces the existing one
    ///   wholesale. An absent or empty list leaves the existing ingredients.
    #[must_use]
    pub fn merge(&self, existing: &FoodItem, refined: &FoodItem) -> FoodItem {
        let mut merged = existing.clone();

        if let Some(quantity) = &refined.quantity {
            merged.quantity = Some(quantity.clone());
        }
        if let Some(unit) = &refined.unit {
            merged.unit = Some(unit.clone());
        }

        if let Some(refined_facts) = &refined.nutrition {
            merged.nutrition.get_or_insert_with(Default::default);
            for nutrient in Nutrient::ALL {
                let Some(new_value) = refined_facts.get(nutrient) else {
                    continue;
                };
                let old_value = existing.nested(nutrient).unwrap_or(0.0);
                if self.apply(&merged.name, nutrient, old_value, new_value) {
                    merged.set_nested(nutrient, new_value);
                }
            }
        } else {
            for nutrient in Nutrient::ALL {
                let Some(new_value) = refined.flat(nutrient) else {
                    continue;
                };
                let old_value = existing.flat(nutrient).unwrap_or(0.0);
                if self.apply(&merged.name, nutrient, old_value, new_value) {
                    merged.set_flat(nutrient, new_value);
                }
            }
        }

        // TODO: confirm with product whether an explicitly empty list should clear ingredients
        if let Some(ingredients) = refined.ingredients.as_ref().filter(|list| !list.is_empty()) {
            merged.ingredients = Some(ingredients.clone());
        }

        merged
    }

    fn apply(&self, food: &str, nutrient: Nutrient, old_value: f64, new_value: f64) -> bool {
        let significant = is_significant_change(old_value, new_value, self.significant_change_ratio);
        if significant {
            debug!(
                food = %food,
                nutrient = %nutrient,
                old_value,
                new_value,
                "Applying significant nutrition change"
            );
        }
        significant
    }
}

/// Merge a refined food into an existing one with the default 10% change ratio
#[must_use]
pub fn merge_nutrition(existing: &FoodItem, refined: &FoodItem) -> FoodItem {
    NutritionMerger::default().merge(existing, refined)
}
