// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Meal matching configuration with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use pierre_core::constants::{env_vars, meal_matching};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static MEAL_MATCHING_CONFIG: OnceLock<MealMatchingConfig> = OnceLock::new();

/// Tunables for food name matching and nutrition merging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealMatchingConfig {
    /// Minimum edit-distance similarity ratio (0, 1] for the fallback rule
    pub similarity_threshold: f64,
    /// Relative change a refined nutrient must exceed to replace the existing value
    pub significant_change_ratio: f64,
    /// Treat names sharing their last two words as the same food
    pub shared_tail_enabled: bool,
    /// Treat names in the same food category (sandwich, salad, ...) as the same food
    pub food_patterns_enabled: bool,
}

impl Default for MealMatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: meal_matching::DEFAULT_SIMILARITY_THRESHOLD,
            significant_change_ratio: meal_matching::DEFAULT_SIGNIFICANT_CHANGE_RATIO,
            shared_tail_enabled: true,
            food_patterns_enabled: true,
        }
    }
}

impl MealMatchingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        MEAL_MATCHING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load meal matching config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the similarity threshold
    #[must_use]
    pub const fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Replace the significant-change ratio
    #[must_use]
    pub const fn with_significant_change_ratio(mut self, ratio: f64) -> Self {
        self.significant_change_ratio = ratio;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is outside (0, 1] or the ratio is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "similarity_threshold must be in (0, 1]",
            ));
        }
        if !self.significant_change_ratio.is_finite() || self.significant_change_ratio < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "significant_change_ratio must be a finite value >= 0",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::SIMILARITY_THRESHOLD,
            &mut self.similarity_threshold,
        )?;
        Self::apply_env_var(
            env_vars::SIGNIFICANT_CHANGE_RATIO,
            &mut self.significant_change_ratio,
        )?;
        Self::apply_env_var(env_vars::SHARED_TAIL_ENABLED, &mut self.shared_tail_enabled)?;
        Self::apply_env_var(
            env_vars::FOOD_PATTERNS_ENABLED,
            &mut self.food_patterns_enabled,
        )?;
        Ok(self)
    }
}
