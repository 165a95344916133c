// ABOUTME: Re-exports command modules for pierre-meal-cli
// ABOUTME: Provides merge, totals, compare, and meal log reconciliation commands

pub mod compare;
pub mod merge;
pub mod reconcile_log;
pub mod totals;
