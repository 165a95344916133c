// ABOUTME: Layered food name similarity: exact, shared tail, dish category, edit distance
// ABOUTME: Decides whether two logged names denote the same food and finds matches in a list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize::normalize_food_name;
use super::patterns::{shared_food_category, FoodCategory};
use crate::config::MealMatchingConfig;
use pierre_core::constants::meal_matching::{SHARED_TAIL_MIN_WORDS, SHARED_TAIL_WORDS};
use pierre_core::models::FoodItem;
use serde::{Deserialize, Serialize};

/// Rule that decided two names denote the same food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum MatchReason {
    /// Normalized names are identical
    Exact,
    /// Both names have 3+ words and share their last two ("strawberry protein shake")
    SharedTail,
    /// Both names fall in the same dish category ("turkey sandwich" / "ham sandwich")
    FoodPattern {
        /// Category both names matched
        category: FoodCategory,
    },
    /// Edit-distance similarity ratio cleared the threshold
    EditDistance {
        /// Similarity ratio in [0, 1]
        ratio: f64,
    },
}

/// Levenshtein edit distance between two strings, counted in characters
///
/// Fills the full `(len_a + 1) x (len_b + 1)` dynamic-programming table.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut dp = vec![vec![0_usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
            };
        }
    }

    dp[a.len()][b.len()]
}

/// Similarity ratio `1 - distance / max_len`, 1.0 when both strings are empty
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

fn shares_tail(normalized_a: &str, normalized_b: &str) -> bool {
    let words_a: Vec<&str> = normalized_a.split_whitespace().collect();
    let words_b: Vec<&str> = normalized_b.split_whitespace().collect();
    if words_a.len() < SHARED_TAIL_MIN_WORDS || words_b.len() < SHARED_TAIL_MIN_WORDS {
        return false;
    }
    words_a[words_a.len() - SHARED_TAIL_WORDS..] == words_b[words_b.len() - SHARED_TAIL_WORDS..]
}

/// Explain why two names match, or `None` when they do not
///
/// Rules run in order and short-circuit: exact normalized match, shared
/// two-word tail, shared dish category, then edit-distance ratio against
/// `config.similarity_threshold`. The two heuristic rules can be switched off
/// through the configuration.
#[must_use]
pub fn explain_similarity(
    name_a: &str,
    name_b: &str,
    config: &MealMatchingConfig,
) -> Option<MatchReason> {
    let a = normalize_food_name(name_a);
    let b = normalize_food_name(name_b);

    if a == b {
        return Some(MatchReason::Exact);
    }
    if config.shared_tail_enabled && shares_tail(&a, &b) {
        return Some(MatchReason::SharedTail);
    }
    if config.food_patterns_enabled {
        if let Some(category) = shared_food_category(&a, &b) {
            return Some(MatchReason::FoodPattern { category });
        }
    }

    let ratio = similarity_ratio(&a, &b);
    (ratio >= config.similarity_threshold).then_some(MatchReason::EditDistance { ratio })
}

/// Whether two names denote the same food, using the default threshold of 0.85
#[must_use]
pub fn are_similar_names(name_a: &str, name_b: &str) -> bool {
    explain_similarity(name_a, name_b, &MealMatchingConfig::default()).is_some()
}

/// Whether two names denote the same food under a custom edit-distance threshold
#[must_use]
pub fn are_similar_names_with_threshold(name_a: &str, name_b: &str, threshold: f64) -> bool {
    let config = MealMatchingConfig::default().with_similarity_threshold(threshold);
    explain_similarity(name_a, name_b, &config).is_some()
}

/// First candidate whose name matches the target's, earliest wins
#[must_use]
pub fn find_matching_food<'a>(target: &FoodItem, candidates: &'a [FoodItem]) -> Option<&'a FoodItem> {
    candidates
        .iter()
        .find(|candidate| are_similar_names(&target.name, &candidate.name))
}
