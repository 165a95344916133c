// ABOUTME: Food and nutrition models for meal logging and refinement merges
// ABOUTME: FoodItem, NutritionFacts, Nutrient, Quantity, and the NutritionView accessor trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four tracked macro values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    Protein,
    /// Carbohydrates in grams
    Carbs,
    /// Fat in grams
    Fat,
}

impl Nutrient {
    /// All nutrients in canonical order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// JSON field name used by both the nested and the flat shape
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Nested `nutrition` sub-record of a food item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

impl NutritionFacts {
    /// Build a fully populated record
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories: Some(calories),
            protein: Some(protein),
            carbs: Some(carbs),
            fat: Some(fat),
        }
    }

    /// Raw value for a nutrient, `None` when the field was omitted
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    /// Set a nutrient value
    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        *self.slot(nutrient) = Some(value);
    }

    fn slot(&mut self, nutrient: Nutrient) -> &mut Option<f64> {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
        }
    }
}

/// Serving quantity as sent by loggers and AI refiners: a number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Numeric amount (1, 0.5, 250)
    Amount(f64),
    /// Descriptive amount ("1 1/2", "a handful")
    Text(String),
}

impl From<f64> for Quantity {
    fn from(amount: f64) -> Self {
        Self::Amount(amount)
    }
}

impl From<&str> for Quantity {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Which of the two accepted nutrition layouts a food item carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionShape {
    /// Values live under the `nutrition` sub-record
    Nested,
    /// Values are top-level `calories`/`protein`/`carbs`/`fat` fields
    Flat,
}

/// Uniform read access to macro values regardless of storage layout
pub trait NutritionView {
    /// Value of a nutrient, 0 when absent
    fn nutrient(&self, nutrient: Nutrient) -> f64;

    /// Energy in kcal
    fn calories(&self) -> f64 {
        self.nutrient(Nutrient::Calories)
    }

    /// Protein in grams
    fn protein(&self) -> f64 {
        self.nutrient(Nutrient::Protein)
    }

    /// Carbohydrates in grams
    fn carbs(&self) -> f64 {
        self.nutrient(Nutrient::Carbs)
    }

    /// Fat in grams
    fn fat(&self) -> f64 {
        self.nutrient(Nutrient::Fat)
    }
}

impl NutritionView for NutritionFacts {
    fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.get(nutrient).unwrap_or(0.0)
    }
}

/// A single logged food
///
/// Accepts both nutrition layouts seen in meal logs and AI refinement
/// responses: a nested `nutrition` record or flat top-level fields.
/// Every field other than `name` may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Free-text food name, drives matching
    pub name: String,
    /// Serving quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    /// Serving unit (g, cup, slice, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Nested nutrition values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionFacts>,
    /// Flat energy value in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Flat protein value in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Flat carbohydrate value in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Flat fat value in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Component foods for composite items (sandwiches, bowls, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<FoodItem>>,
}

impl FoodItem {
    /// Create a food item with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the serving quantity
    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<Quantity>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Set the serving unit
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Attach a nested nutrition record
    #[must_use]
    pub fn with_nutrition(mut self, nutrition: NutritionFacts) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    /// Set a flat top-level nutrient value
    #[must_use]
    pub fn with_flat(mut self, nutrient: Nutrient, value: f64) -> Self {
        self.set_flat(nutrient, value);
        self
    }

    /// Attach component ingredients
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<Self>) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    /// Layout this item stores nutrition in
    #[must_use]
    pub const fn shape(&self) -> NutritionShape {
        if self.nutrition.is_some() {
            NutritionShape::Nested
        } else {
            NutritionShape::Flat
        }
    }

    /// Flat top-level value for a nutrient
    #[must_use]
    pub const fn flat(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    /// Nested value for a nutrient
    #[must_use]
    pub fn nested(&self, nutrient: Nutrient) -> Option<f64> {
        self.nutrition.as_ref().and_then(|facts| facts.get(nutrient))
    }

    /// Set a flat top-level nutrient value
    pub fn set_flat(&mut self, nutrient: Nutrient, value: f64) {
        let slot = match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
        };
        *slot = Some(value);
    }

    /// Set a nested nutrient value, creating the `nutrition` record if needed
    pub fn set_nested(&mut self, nutrient: Nutrient, value: f64) {
        self.nutrition
            .get_or_insert_with(NutritionFacts::default)
            .set(nutrient, value);
    }

    /// Number of component ingredients (0 for simple items)
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.as_ref().map_or(0, Vec::len)
    }
}

impl NutritionView for FoodItem {
    /// Nested value first, flat value second, 0 otherwise
    fn nutrient(&self, nutrient: Nutrient) -> f64 {
        self.nested(nutrient)
            .or_else(|| self.flat(nutrient))
            .unwrap_or(0.0)
    }
}
