// ABOUTME: Applies food-list reconciliation to whole meals and daily meal logs
// ABOUTME: Routes refinements to meals by type and reconciles meals in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::reconcile::MealReconciler;
use pierre_core::models::{FoodItem, MealEntry, MealLog, MealType};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Refined foods for one meal type, as returned by a refinement pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRefinement {
    /// Meal the refined foods belong to
    pub meal_type: MealType,
    /// Refined foods
    #[serde(default)]
    pub foods: Vec<FoodItem>,
}

/// Concatenate refinement foods per meal type, keeping first-seen type order
fn group_by_meal_type(refinements: &[MealRefinement]) -> Vec<(MealType, Vec<FoodItem>)> {
    let mut groups: Vec<(MealType, Vec<FoodItem>)> = Vec::new();
    for refinement in refinements {
        if let Some((_, foods)) = groups
            .iter_mut()
            .find(|(meal_type, _)| *meal_type == refinement.meal_type)
        {
            foods.extend(refinement.foods.iter().cloned());
        } else {
            groups.push((refinement.meal_type, refinement.foods.clone()));
        }
    }
    groups
}

impl MealReconciler {
    /// Reconcile one meal's foods, keeping its type, name, and timestamp
    #[must_use]
    pub fn reconcile_meal(&self, meal: &MealEntry, refined: &[FoodItem]) -> MealEntry {
        MealEntry {
            meal_type: meal.meal_type,
            timestamp: meal.timestamp,
            name: meal.name.clone(),
            foods: self.merge_foods(&meal.foods, refined),
        }
    }

    /// Reconcile a day of meals against per-meal-type refinements
    ///
    /// The first meal of each type receives every refined food for that type;
    /// later meals of the same type are kept as they are. Refinements for a
    /// type with no logged meal become new meals appended in first-seen order.
    #[must_use]
    pub fn reconcile_meal_log(&self, log: &MealLog, refinements: &[MealRefinement]) -> MealLog {
        let groups = group_by_meal_type(refinements);

        let mut served = HashSet::new();
        let assignments: Vec<Option<&[FoodItem]>> = log
            .meals
            .iter()
            .map(|meal| {
                if !served.insert(meal.meal_type) {
                    return None;
                }
                groups
                    .iter()
                    .find(|(meal_type, _)| *meal_type == meal.meal_type)
                    .map(|(_, foods)| foods.as_slice())
            })
            .collect();

        let mut meals: Vec<MealEntry> = log
            .meals
            .par_iter()
            .zip(assignments.par_iter())
            .map(|(meal, refined)| match refined {
                Some(foods) => self.reconcile_meal(meal, foods),
                None => meal.clone(),
            })
            .collect();

        for (meal_type, foods) in groups {
            if !served.contains(&meal_type) {
                debug!(meal_type = ?meal_type, foods = foods.len(), "Adding refined meal absent from log");
                meals.push(MealEntry::new(meal_type).with_foods(foods));
            }
        }

        MealLog {
            id: log.id.clone(),
            date: log.date,
            meals,
        }
    }
}

/// Reconcile one meal with the default matching configuration
#[must_use]
pub fn reconcile_meal(meal: &MealEntry, refined: &[FoodItem]) -> MealEntry {
    MealReconciler::default().reconcile_meal(meal, refined)
}

/// Reconcile a daily meal log with the default matching configuration
#[must_use]
pub fn reconcile_meal_log(log: &MealLog, refinements: &[MealRefinement]) -> MealLog {
    MealReconciler::default().reconcile_meal_log(log, refinements)
}
