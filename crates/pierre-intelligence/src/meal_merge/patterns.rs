// ABOUTME: Rule table of common dish categories used to pair modifier-swapped names
// ABOUTME: "Turkey Sandwich" and "Ham Sandwich" land in the same category and match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Dish category recognized by the pattern rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Shakes and protein shakes
    Shake,
    /// Sandwiches
    Sandwich,
    /// Burgers
    Burger,
    /// Salads
    Salad,
    /// Smoothies
    Smoothie,
    /// Coffee drinks
    Coffee,
    /// Tea drinks
    Tea,
    /// Wraps
    Wrap,
    /// Bowls
    Bowl,
}

/// Category patterns, evaluated in order. Each allows one modifier word before the dish.
const CATEGORY_PATTERNS: [(FoodCategory, &str); 9] = [
    (FoodCategory::Shake, r"(?i)\b(?:\w+\s+)?(?:protein\s+)?shake\b"),
    (FoodCategory::Sandwich, r"(?i)\b(?:\w+\s+)?sandwich\b"),
    (FoodCategory::Burger, r"(?i)\b(?:\w+\s+)?burger\b"),
    (FoodCategory::Salad, r"(?i)\b(?:\w+\s+)?salad\b"),
    (FoodCategory::Smoothie, r"(?i)\b(?:\w+\s+)?smoothie\b"),
    (FoodCategory::Coffee, r"(?i)\b(?:\w+\s+)?coffee\b"),
    (FoodCategory::Tea, r"(?i)\b(?:\w+\s+)?tea\b"),
    (FoodCategory::Wrap, r"(?i)\b(?:\w+\s+)?wrap\b"),
    (FoodCategory::Bowl, r"(?i)\b(?:\w+\s+)?bowl\b"),
];

/// Compiled category pattern
struct FoodPattern {
    category: FoodCategory,
    regex: Regex,
}

/// Compiled once; a pattern that fails to compile is skipped rather than aborting
static FOOD_PATTERNS: LazyLock<Vec<FoodPattern>> = LazyLock::new(|| {
    CATEGORY_PATTERNS
        .iter()
        .filter_map(|(category, pattern)| {
            Regex::new(pattern).ok().map(|regex| FoodPattern {
                category: *category,
                regex,
            })
        })
        .collect()
});

fn last_word(text: &str) -> Option<&str> {
    text.split_whitespace().next_back()
}

/// Category both names fall into, if any
///
/// Both names must match the same pattern and the matched substrings must end
/// in the same word. Patterns are tried in table order; the first hit wins.
#[must_use]
pub fn shared_food_category(normalized_a: &str, normalized_b: &str) -> Option<FoodCategory> {
    FOOD_PATTERNS.iter().find_map(|pattern| {
        let match_a = pattern.regex.find(normalized_a)?;
        let match_b = pattern.regex.find(normalized_b)?;
        let tail_a = last_word(match_a.as_str())?;
        let tail_b = last_word(match_b.as_str())?;
        tail_a.eq_ignore_ascii_case(tail_b).then_some(pattern.category)
    })
}
