// ABOUTME: Main library entry point for Pierre meal reconciliation
// ABOUTME: Re-exports models and algorithms, plus error handling, logging, and JSON I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Meal Reconcile
//!
//! Merges an AI-refined list of foods back into a user's meal log without
//! destroying entries the refinement did not mention.
//!
//! ## Architecture
//!
//! - **`pierre-core`**: `FoodItem`, `NutritionFacts`, `MealEntry`, `MealLog`
//! - **`pierre-intelligence`**: name matching, nutrition merging, reconciliation, totals
//! - **this crate**: unified errors, logging setup, JSON I/O, and the `pierre-meal-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_meal_reconcile::meal_merge::merge_foods_preserving_existing;
//! use pierre_meal_reconcile::models::{FoodItem, Nutrient, NutritionFacts};
//!
//! let logged = vec![FoodItem::new("Greek Yogurt").with_nutrition(NutritionFacts::new(150.0, 15.0, 8.0, 4.0))];
//! let refined = vec![FoodItem::new("Blueberries").with_flat(Nutrient::Calories, 40.0)];
//!
//! let merged = merge_foods_preserving_existing(&logged, &refined);
//! assert_eq!(merged.len(), 2);
//! assert_eq!(merged[0], logged[0]);
//! ```

/// Unified error handling with error codes and exit code mapping
pub mod errors;

/// JSON input/output helpers for food lists and meal logs
pub mod food_io;

/// Structured logging configuration
pub mod logging;

/// Matching configuration
pub use pierre_intelligence::config;
/// Food-list reconciliation, name similarity, and macro totals
pub use pierre_intelligence::meal_merge;

/// Constants (thresholds, environment variable names, service names)
pub use pierre_core::constants;
/// Food and meal data models
pub use pierre_core::models;
