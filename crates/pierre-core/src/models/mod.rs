// ABOUTME: Core data models for meal logging and food refinement
// ABOUTME: Re-exports FoodItem, NutritionFacts, MealEntry and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Food and meal structures shared by the matching engine and its callers.
//!
//! ## Design Principles
//!
//! - **Shape Tolerant**: Nutrition may arrive nested or flat; both deserialize into `FoodItem`
//! - **Lenient**: Every optional field may be omitted and reads as 0 through `NutritionView`
//! - **Serializable**: Round-trips the JSON shape produced by loggers and AI refiners

mod meal;
mod nutrition;

pub use meal::{MealEntry, MealLog, MealType};
pub use nutrition::{FoodItem, Nutrient, NutritionFacts, NutritionShape, NutritionView, Quantity};
