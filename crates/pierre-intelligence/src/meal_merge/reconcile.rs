// ABOUTME: Reconciles an AI-refined food list with the user's logged foods
// ABOUTME: Matches, merges, or appends each refined item without dropping logged entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition_merge::NutritionMerger;
use super::similarity::{explain_similarity, MatchReason};
use crate::config::MealMatchingConfig;
use pierre_core::models::FoodItem;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What happened to one refined item during reconciliation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MergeAction {
    /// Refined item was merged into an existing item, which kept its position
    Merged {
        /// Index in the refined list
        refined_index: usize,
        /// Index in the existing list (and in the result)
        existing_index: usize,
        /// Rule that paired the two names
        reason: MatchReason,
    },
    /// Refined item had no unclaimed match and was appended
    Appended {
        /// Index in the refined list
        refined_index: usize,
        /// Index in the result list
        result_index: usize,
    },
}

/// Reconciled food list plus one action per refined item, in refined order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Existing items (merged where matched) followed by appended refined items
    pub foods: Vec<FoodItem>,
    /// Per-refined-item actions
    pub actions: Vec<MergeAction>,
}

impl MergeOutcome {
    /// Number of refined items merged into existing ones
    #[must_use]
    pub fn merged_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|action| matches!(action, MergeAction::Merged { .. }))
            .count()
    }

    /// Number of refined items appended as new foods
    #[must_use]
    pub fn appended_count(&self) -> usize {
        self.actions.len() - self.merged_count()
    }
}

/// Food-list reconciler bound to one matching configuration
#[derive(Debug, Clone, Default)]
pub struct MealReconciler {
    config: MealMatchingConfig,
}

impl MealReconciler {
    /// Create a reconciler with explicit configuration
    #[must_use]
    pub const fn new(config: MealMatchingConfig) -> Self {
        Self { config }
    }

    /// Create a reconciler from the global (environment-derived) configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(MealMatchingConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &MealMatchingConfig {
        &self.config
    }

    /// First existing item not yet claimed whose name matches the target
    fn find_unclaimed_match(
        &self,
        target: &FoodItem,
        existing: &[FoodItem],
        claimed: &[bool],
    ) -> Option<(usize, MatchReason)> {
        existing
            .iter()
            .enumerate()
            .filter(|(index, _)| !claimed[*index])
            .find_map(|(index, candidate)| {
                explain_similarity(&target.name, &candidate.name, &self.config)
                    .map(|reason| (index, reason))
            })
    }

    /// Reconcile `refined` into `existing`, reporting every decision
    ///
    /// Existing items keep their positions and are never removed. Each refined
    /// item, in order, claims the first unclaimed existing item with a matching
    /// name and is merged into it; otherwise it is appended unchanged. An
    /// existing item is claimed at most once per call.
    #[must_use]
    pub fn reconcile(&self, existing: &[FoodItem], refined: &[FoodItem]) -> MergeOutcome {
        if existing.is_empty() {
            return MergeOutcome {
                foods: refined.to_vec(),
                actions: (0..refined.len())
                    .map(|index| MergeAction::Appended {
                        refined_index: index,
                        result_index: index,
                    })
                    .collect(),
            };
        }
        if refined.is_empty() {
            return MergeOutcome {
                foods: existing.to_vec(),
                actions: Vec::new(),
            };
        }

        let merger = NutritionMerger::new(&self.config);
        let mut foods = existing.to_vec();
        let mut claimed = vec![false; existing.len()];
        let mut actions = Vec::with_capacity(refined.len());

        for (refined_index, refined_food) in refined.iter().enumerate() {
            if let Some((existing_index, reason)) =
                self.find_unclaimed_match(refined_food, existing, &claimed)
            {
                debug!(
                    refined = %refined_food.name,
                    existing = %existing[existing_index].name,
                    existing_index,
                    reason = ?reason,
                    "Merging refined food into logged food"
                );
                foods[existing_index] = merger.merge(&existing[existing_index], refined_food);
                claimed[existing_index] = true;
                actions.push(MergeAction::Merged {
                    refined_index,
                    existing_index,
                    reason,
                });
            } else {
                debug!(refined = %refined_food.name, "No logged match, appending refined food");
                actions.push(MergeAction::Appended {
                    refined_index,
                    result_index: foods.len(),
                });
                foods.push(refined_food.clone());
            }
        }

        MergeOutcome { foods, actions }
    }

    /// Reconcile and return only the food list
    #[must_use]
    pub fn merge_foods(&self, existing: &[FoodItem], refined: &[FoodItem]) -> Vec<FoodItem> {
        self.reconcile(existing, refined).foods
    }
}

/// Merge a refined food list into an existing one without losing logged items
///
/// Uses the default matching configuration so results do not depend on the
/// process environment.
#[must_use]
pub fn merge_foods_preserving_existing(
    existing: &[FoodItem],
    refined: &[FoodItem],
) -> Vec<FoodItem> {
    MealReconciler::default().merge_foods(existing, refined)
}
