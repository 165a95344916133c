// ABOUTME: Property-based tests for food-list reconciliation and name similarity
// ABOUTME: Checks preservation, bounded growth, and edit distance against an independent oracle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_meal_reconcile::meal_merge::{
    are_similar_names, is_significant_change, levenshtein_distance, merge_foods_preserving_existing,
    normalize_food_name, similarity_ratio, MealReconciler, MergeAction,
};
use pierre_meal_reconcile::models::{FoodItem, Nutrient};
use proptest::prelude::*;

mod common;

const WORDS: [&str; 12] = [
    "turkey", "ham", "sandwich", "protein", "shake", "greek", "yogurt", "apple", "iced",
    "coffee", "salad", "bowl",
];

fn food_name() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..4)
        .prop_map(|words| words.join(" "))
}

fn food() -> impl Strategy<Value = FoodItem> {
    (food_name(), prop::option::of(0.0_f64..1500.0)).prop_map(|(name, calories)| {
        let food = FoodItem::new(name);
        match calories {
            Some(value) => food.with_flat(Nutrient::Calories, value),
            None => food,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every logged item stays at its index with its name
    #[test]
    fn prop_existing_items_keep_position_and_name(
        existing in prop::collection::vec(food(), 0..8),
        refined in prop::collection::vec(food(), 0..8),
    ) {
        let merged = merge_foods_preserving_existing(&existing, &refined);

        prop_assert!(merged.len() >= existing.len());
        prop_assert!(merged.len() <= existing.len() + refined.len());
        for (index, food) in existing.iter().enumerate() {
            prop_assert_eq!(&merged[index].name, &food.name);
        }
    }

    /// Merging an empty refinement returns the logged list unchanged
    #[test]
    fn prop_empty_refined_returns_existing(existing in prop::collection::vec(food(), 0..8)) {
        prop_assert_eq!(merge_foods_preserving_existing(&existing, &[]), existing);
    }

    /// Merging into an empty log returns the refinement unchanged
    #[test]
    fn prop_empty_existing_returns_refined(refined in prop::collection::vec(food(), 0..8)) {
        prop_assert_eq!(merge_foods_preserving_existing(&[], &refined), refined);
    }

    /// Every refined item is either merged once or appended once
    #[test]
    fn prop_actions_cover_each_refined_item(
        existing in prop::collection::vec(food(), 1..8),
        refined in prop::collection::vec(food(), 1..8),
    ) {
        let outcome = MealReconciler::default().reconcile(&existing, &refined);

        prop_assert_eq!(outcome.actions.len(), refined.len());
        prop_assert_eq!(outcome.foods.len(), existing.len() + outcome.appended_count());

        let mut claimed = vec![false; existing.len()];
        for action in &outcome.actions {
            if let MergeAction::Merged { existing_index, .. } = action {
                prop_assert!(!claimed[*existing_index]);
                claimed[*existing_index] = true;
            }
        }
    }

    /// Levenshtein distance agrees with strsim
    #[test]
    fn prop_levenshtein_matches_strsim(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Ratio stays in [0, 1] and is symmetric
    #[test]
    fn prop_similarity_ratio_bounded_and_symmetric(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        let forward = similarity_ratio(&a, &b);
        let backward = similarity_ratio(&b, &a);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert!((forward - backward).abs() < 1e-12);
    }

    /// Matching is symmetric and reflexive
    #[test]
    fn prop_are_similar_names_symmetric(a in food_name(), b in food_name()) {
        prop_assert!(are_similar_names(&a, &a));
        prop_assert_eq!(are_similar_names(&a, &b), are_similar_names(&b, &a));
    }

    /// Normalization is idempotent
    #[test]
    fn prop_normalize_idempotent(name in "[A-Za-z0-9&'\\x{2019} \\t]{0,40}") {
        let once = normalize_food_name(&name);
        prop_assert_eq!(normalize_food_name(&once), once);
    }

    /// Identical values are never a significant change
    #[test]
    fn prop_identical_values_not_significant(value in -5000.0_f64..5000.0, ratio in 0.0_f64..1.0) {
        prop_assert!(!is_significant_change(value, value, ratio));
    }
}
