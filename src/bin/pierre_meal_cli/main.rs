// ABOUTME: Pierre meal CLI - reconciles AI-refined food lists with logged meals
// ABOUTME: Handles merge, totals, name comparison, and daily meal log reconciliation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Merge a refined food list into the logged one
//! pierre-meal-cli merge --existing logged.json --refined refined.json
//!
//! # Same, with a per-item report of merges and appends
//! pierre-meal-cli merge --existing logged.json --refined refined.json --report
//!
//! # Macro totals for a food list
//! pierre-meal-cli totals --input logged.json
//!
//! # Explain whether two names are treated as the same food
//! pierre-meal-cli compare "Turkey Sandwich" "Ham Sandwich"
//!
//! # Reconcile a whole day of meals
//! pierre-meal-cli reconcile-log --log day.json --refinements refinements.json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pierre_meal_reconcile::{errors::AppResult, logging::LoggingConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "pierre-meal-cli",
    version,
    about = "Pierre Meal Reconciliation CLI",
    long_about = "Merges AI-refined food lists into logged meals without losing user entries."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Merge a refined food list into an existing food list
    Merge {
        /// JSON file with the logged food list
        #[arg(long)]
        existing: PathBuf,

        /// JSON file with the refined food list
        #[arg(long)]
        refined: PathBuf,

        /// Write the result here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Emit merge/append actions alongside the foods
        #[arg(long)]
        report: bool,

        /// Edit-distance similarity threshold in (0, 1]
        #[arg(long)]
        threshold: Option<f64>,

        /// Relative change a nutrient must exceed to be updated
        #[arg(long)]
        change_ratio: Option<f64>,
    },

    /// Sum calories, protein, carbs, and fat of a food list
    Totals {
        /// JSON file with the food list
        #[arg(long)]
        input: PathBuf,
    },

    /// Check whether two food names are treated as the same food
    Compare {
        /// First food name
        name_a: String,

        /// Second food name
        name_b: String,

        /// Edit-distance similarity threshold in (0, 1]
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Reconcile a daily meal log with per-meal refinements
    ReconcileLog {
        /// JSON file with the meal log
        #[arg(long)]
        log: PathBuf,

        /// JSON file with a list of `{ meal_type, foods }` refinements
        #[arg(long)]
        refinements: PathBuf,

        /// Write the result here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Merge {
            existing,
            refined,
            output,
            report,
            threshold,
            change_ratio,
        } => {
            let config = helpers::config::resolve(threshold, change_ratio)?;
            commands::merge::run(&existing, &refined, output.as_deref(), report, config)
        }
        Command::Totals { input } => commands::totals::run(&input),
        Command::Compare {
            name_a,
            name_b,
            threshold,
        } => {
            let config = helpers::config::resolve(threshold, None)?;
            commands::compare::run(name_a, name_b, &config)
        }
        Command::ReconcileLog {
            log,
            refinements,
            output,
        } => {
            let config = helpers::config::resolve(None, None)?;
            commands::reconcile_log::run(&log, &refinements, output.as_deref(), config)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, resource = ?e.resource_id, "Command failed: {}", e.message);
            eprintln!("error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
