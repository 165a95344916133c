// ABOUTME: Resolves meal matching configuration for CLI commands
// ABOUTME: Environment overrides first, then command-line flags, then validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_meal_reconcile::{config::MealMatchingConfig, errors::AppResult};
use tracing::debug;

/// Load configuration from the environment and apply flag overrides
pub fn resolve(
    threshold: Option<f64>,
    change_ratio: Option<f64>,
) -> AppResult<MealMatchingConfig> {
    let mut config = MealMatchingConfig::load()?;
    if let Some(threshold) = threshold {
        config = config.with_similarity_threshold(threshold);
    }
    if let Some(ratio) = change_ratio {
        config = config.with_significant_change_ratio(ratio);
    }
    config.validate()?;
    debug!(config = ?config, "Resolved meal matching configuration");
    Ok(config)
}
