// ABOUTME: Meal logging models grouping food items by meal and by day
// ABOUTME: MealType, MealEntry, and MealLog definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::FoodItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of meal
///
/// Serializes as snake case. Deserialization is lossy: casing and surrounding
/// whitespace are ignored and unknown names become `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// One logged meal and the foods in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Meal type (breakfast, lunch, dinner, snack)
    pub meal_type: MealType,
    /// Timestamp when meal was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Meal description or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Logged foods, in insertion order
    #[serde(default)]
    pub foods: Vec<FoodItem>,
}

impl MealEntry {
    /// Create an empty meal of the given type
    #[must_use]
    pub const fn new(meal_type: MealType) -> Self {
        Self {
            meal_type,
            timestamp: None,
            name: None,
            foods: Vec::new(),
        }
    }

    /// Replace the food list
    #[must_use]
    pub fn with_foods(mut self, foods: Vec<FoodItem>) -> Self {
        self.foods = foods;
        self
    }
}

/// A day of logged meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLog {
    /// Unique identifier for this log
    pub id: String,
    /// Day the meals belong to
    pub date: DateTime<Utc>,
    /// Logged meals, in insertion order
    #[serde(default)]
    pub meals: Vec<MealEntry>,
}
