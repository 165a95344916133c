// ABOUTME: Core types and constants for Pierre meal reconciliation
// ABOUTME: Foundation crate with food and meal models plus matching constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for meal logging and
//! AI refinement merges. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: `FoodItem`, `NutritionFacts`, `MealEntry`, `MealLog` and friends
//! - **constants**: Matching thresholds and environment variable names

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FoodItem`, `MealEntry`, `NutritionView`, etc.)
pub mod models;
