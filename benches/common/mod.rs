// ABOUTME: Common benchmark utilities and fixtures for meal reconciliation benchmarks
// ABOUTME: Provides deterministic food list generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
