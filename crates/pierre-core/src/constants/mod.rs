// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Matching thresholds, merge ratios, and service identifiers for meal reconciliation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Food name matching defaults
pub mod meal_matching {
    /// Minimum edit-distance similarity ratio for two names to match
    pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;
    /// Relative change above which a refined nutrient value replaces the existing one
    pub const DEFAULT_SIGNIFICANT_CHANGE_RATIO: f64 = 0.10;
    /// Minimum words in both names before the shared-tail rule applies
    pub const SHARED_TAIL_MIN_WORDS: usize = 3;
    /// Number of trailing words compared by the shared-tail rule
    pub const SHARED_TAIL_WORDS: usize = 2;
}

/// Environment variable names for meal matching overrides
pub mod env_vars {
    /// Similarity threshold override
    pub const SIMILARITY_THRESHOLD: &str = "INTELLIGENCE_MEAL_SIMILARITY_THRESHOLD";
    /// Significant-change ratio override
    pub const SIGNIFICANT_CHANGE_RATIO: &str = "INTELLIGENCE_MEAL_SIGNIFICANT_CHANGE_RATIO";
    /// Toggle for the shared-tail rule
    pub const SHARED_TAIL_ENABLED: &str = "INTELLIGENCE_MEAL_SHARED_TAIL_ENABLED";
    /// Toggle for the food-category pattern rule
    pub const FOOD_PATTERNS_ENABLED: &str = "INTELLIGENCE_MEAL_FOOD_PATTERNS_ENABLED";
}

/// Service names used in structured logs
pub mod service_names {
    /// Meal reconciliation service
    pub const PIERRE_MEAL_RECONCILE: &str = "pierre-meal-reconcile";
}
