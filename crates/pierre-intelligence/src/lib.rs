// ABOUTME: Meal reconciliation intelligence for the Pierre platform
// ABOUTME: Food name matching, nutrition merging, and macro aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Algorithms that merge AI-refined food lists into user meal logs.
//! All operations are pure functions over in-memory data; configuration is
//! read from the environment once and can be overridden per reconciler.

/// Meal matching configuration (thresholds and rule toggles)
pub mod config;

/// Food-list reconciliation, name similarity, and macro totals
pub mod meal_merge;

pub use config::{ConfigError, MealMatchingConfig};
